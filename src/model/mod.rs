pub mod finance;
pub mod parties;
pub mod reference;
pub mod trading;
pub mod user;
pub mod warehouse;

use strum_macros::Display;

/// How a column is bound on write and decoded on read.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ColumnType {
    Int,
    Decimal,
    Text,
    Date,
    DateTime,
    /// TINYINT(1), exposed as 0/1
    Flag,
    /// bcrypt hash; hashed on write, never selected
    Password,
}

#[derive(Debug, Copy, Clone)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    /// Must be present on create
    pub required: bool,
}

impl Column {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Whether the column may appear in a response body.
    pub fn is_visible(&self) -> bool {
        self.ty != ColumnType::Password
    }
}

/// Fixed multi-column lookup, e.g. `GET /warrants/outturn/{OutturnNo}/{SeasonId}/{GradeId}`.
#[derive(Debug)]
pub struct Lookup {
    /// Literal segment after the resource path; empty for none.
    pub segment: &'static str,
    /// Filter columns, in URL order.
    pub columns: &'static [&'static str],
}

impl Lookup {
    /// Route relative to the resource scope, with one `{column}` placeholder per filter.
    pub fn route(&self) -> String {
        let mut route = String::new();
        if !self.segment.is_empty() {
            route.push('/');
            route.push_str(self.segment);
        }
        for column in self.columns {
            route.push_str("/{");
            route.push_str(column);
            route.push('}');
        }
        route
    }
}

/// Descriptor for one CRUD resource.
///
/// `columns` holds every non-key column and doubles as the write allow-list:
/// request bodies may only name these columns.
#[derive(Debug)]
pub struct Entity {
    /// Human readable singular, used in messages.
    pub name: &'static str,
    /// URL path segment.
    pub path: &'static str,
    pub table: &'static str,
    /// Auto-increment integer primary key.
    pub key: &'static str,
    pub columns: &'static [Column],
    /// Upper bound on rows returned by List.
    pub list_limit: Option<u32>,
    pub lookups: &'static [Lookup],
}

impl Entity {
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &'static Column> + '_ {
        self.columns.iter().filter(|c| c.is_visible())
    }
}

/// Every resource served by the API.
pub static ENTITIES: &[&Entity] = &[
    &parties::AGENTS,
    &parties::AGENT_CATEGORIES,
    &parties::GROWERS,
    &parties::COOPERATIVES,
    &parties::FACTORIES,
    &parties::BUYERS,
    &parties::MILLERS,
    &parties::TRANSPORTERS,
    &reference::SEASONS,
    &reference::GRADES,
    &reference::COFFEE_CLASSES,
    &reference::COUNTIES,
    &reference::REGIONS,
    &reference::CURRENCIES,
    &reference::BAG_TYPES,
    &reference::PAYMENT_METHODS,
    &reference::ROLES,
    &trading::AUCTIONS,
    &trading::CATALOGUES,
    &trading::LOTS,
    &trading::BIDS,
    &trading::SALES,
    &trading::SAMPLES,
    &warehouse::WAREHOUSES,
    &warehouse::GRN_MAIN,
    &warehouse::GRN_DETAILS,
    &warehouse::OUTTURNS,
    &warehouse::GRN_OUTTURNS,
    &warehouse::OUTTURN_GRADES,
    &warehouse::WARRANTS,
    &warehouse::BAGS,
    &warehouse::DELIVERIES,
    &finance::PAYMENTS,
    &finance::GROWER_PAYMENTS,
    &finance::INVOICES,
    &finance::BANKS,
    &finance::BANK_ACCOUNTS,
    &finance::DEDUCTIONS,
    &finance::GROWER_DEDUCTIONS,
    &finance::ADVANCES,
    &user::USERS,
];

#[cfg(test)]
pub fn find(path: &str) -> Option<&'static Entity> {
    ENTITIES.iter().copied().find(|e| e.path == path)
}
