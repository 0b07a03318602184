use super::ColumnType::*;
use super::{Column, Entity, Lookup};

pub static AGENTS: Entity = Entity {
    name: "Agent",
    path: "agents",
    table: "agents",
    key: "AgentId",
    columns: &[
        Column::new("AgentName", Text).required(),
        Column::new("AgentCode", Text),
        Column::new("CategoryId", Int),
        Column::new("LicenseNo", Text),
        Column::new("Phone", Text),
        Column::new("Email", Text),
        Column::new("Address", Text),
        Column::new("IsActive", Flag),
    ],
    list_limit: None,
    lookups: &[Lookup {
        segment: "category",
        columns: &["CategoryId"],
    }],
};

pub static AGENT_CATEGORIES: Entity = Entity {
    name: "Agent category",
    path: "agent_categories",
    table: "agent_categories",
    key: "CategoryId",
    columns: &[
        Column::new("CategoryName", Text).required(),
        Column::new("Description", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static GROWERS: Entity = Entity {
    name: "Grower",
    path: "growers",
    table: "growers",
    key: "GrowerId",
    columns: &[
        Column::new("GrowerName", Text).required(),
        Column::new("GrowerCode", Text),
        Column::new("CooperativeId", Int),
        Column::new("FactoryId", Int),
        Column::new("AgentId", Int),
        Column::new("CountyId", Int),
        Column::new("Phone", Text),
        Column::new("Email", Text),
        Column::new("Location", Text),
        Column::new("RegistrationDate", Date),
        Column::new("IsActive", Flag),
    ],
    list_limit: None,
    lookups: &[],
};

pub static COOPERATIVES: Entity = Entity {
    name: "Cooperative",
    path: "cooperatives",
    table: "cooperatives",
    key: "CooperativeId",
    columns: &[
        Column::new("Name", Text).required(),
        Column::new("Code", Text),
        Column::new("CountyId", Int),
        Column::new("Phone", Text),
        Column::new("Email", Text),
        Column::new("IsActive", Flag),
    ],
    list_limit: None,
    lookups: &[],
};

pub static FACTORIES: Entity = Entity {
    name: "Factory",
    path: "factories",
    table: "factories",
    key: "FactoryId",
    columns: &[
        Column::new("FactoryName", Text).required(),
        Column::new("CooperativeId", Int),
        Column::new("Location", Text),
        Column::new("IsActive", Flag),
    ],
    list_limit: None,
    lookups: &[],
};

pub static BUYERS: Entity = Entity {
    name: "Buyer",
    path: "buyers",
    table: "buyers",
    key: "BuyerId",
    columns: &[
        Column::new("BuyerName", Text).required(),
        Column::new("BuyerCode", Text),
        Column::new("LicenseNo", Text),
        Column::new("Phone", Text),
        Column::new("Email", Text),
        Column::new("Address", Text),
        Column::new("IsActive", Flag),
    ],
    list_limit: None,
    lookups: &[],
};

pub static MILLERS: Entity = Entity {
    name: "Miller",
    path: "millers",
    table: "millers",
    key: "MillerId",
    columns: &[
        Column::new("MillerName", Text).required(),
        Column::new("LicenseNo", Text),
        Column::new("Location", Text),
        Column::new("Phone", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static TRANSPORTERS: Entity = Entity {
    name: "Transporter",
    path: "transporters",
    table: "transporters",
    key: "TransporterId",
    columns: &[
        Column::new("Name", Text).required(),
        Column::new("VehicleNo", Text),
        Column::new("Phone", Text),
    ],
    list_limit: None,
    lookups: &[],
};
