use super::ColumnType::*;
use super::{Column, Entity};

pub static SEASONS: Entity = Entity {
    name: "Season",
    path: "seasons",
    table: "seasons",
    key: "SeasonId",
    columns: &[
        Column::new("SeasonName", Text).required(),
        Column::new("StartDate", Date),
        Column::new("EndDate", Date),
        Column::new("IsCurrent", Flag),
    ],
    list_limit: None,
    lookups: &[],
};

pub static GRADES: Entity = Entity {
    name: "Grade",
    path: "grades",
    table: "grades",
    key: "GradeId",
    columns: &[
        Column::new("GradeName", Text).required(),
        Column::new("GradeCode", Text),
        Column::new("ClassId", Int),
        Column::new("Description", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static COFFEE_CLASSES: Entity = Entity {
    name: "Coffee class",
    path: "coffee_classes",
    table: "coffee_classes",
    key: "id",
    columns: &[
        Column::new("ClassName", Text).required(),
        Column::new("Description", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static COUNTIES: Entity = Entity {
    name: "County",
    path: "counties",
    table: "counties",
    key: "CountyId",
    columns: &[
        Column::new("CountyName", Text).required(),
        Column::new("RegionId", Int),
    ],
    list_limit: None,
    lookups: &[],
};

pub static REGIONS: Entity = Entity {
    name: "Region",
    path: "regions",
    table: "regions",
    key: "RegionId",
    columns: &[Column::new("RegionName", Text).required()],
    list_limit: None,
    lookups: &[],
};

pub static CURRENCIES: Entity = Entity {
    name: "Currency",
    path: "currencies",
    table: "currencies",
    key: "CurrencyId",
    columns: &[
        Column::new("CurrencyCode", Text).required(),
        Column::new("CurrencyName", Text),
        Column::new("ExchangeRate", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};

pub static BAG_TYPES: Entity = Entity {
    name: "Bag type",
    path: "bag_types",
    table: "bag_types",
    key: "id",
    columns: &[
        Column::new("TypeName", Text).required(),
        Column::new("TareWeight", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};

pub static PAYMENT_METHODS: Entity = Entity {
    name: "Payment method",
    path: "payment_methods",
    table: "payment_methods",
    key: "id",
    columns: &[Column::new("MethodName", Text).required()],
    list_limit: None,
    lookups: &[],
};

pub static ROLES: Entity = Entity {
    name: "Role",
    path: "roles",
    table: "roles",
    key: "id",
    columns: &[
        Column::new("RoleName", Text).required(),
        Column::new("Description", Text),
    ],
    list_limit: None,
    lookups: &[],
};
