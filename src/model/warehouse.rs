use super::ColumnType::*;
use super::{Column, Entity, Lookup};

pub static WAREHOUSES: Entity = Entity {
    name: "Warehouse",
    path: "warehouses",
    table: "warehouses",
    key: "WarehouseId",
    columns: &[
        Column::new("WarehouseName", Text).required(),
        Column::new("MillerId", Int),
        Column::new("Location", Text),
        Column::new("Capacity", Int),
    ],
    list_limit: None,
    lookups: &[],
};

/// Goods received note header.
pub static GRN_MAIN: Entity = Entity {
    name: "GRN",
    path: "grn_main",
    table: "grn_main",
    key: "id",
    columns: &[
        Column::new("GRNNo", Text).required(),
        Column::new("SeasonId", Int).required(),
        Column::new("GrowerId", Int),
        Column::new("WarehouseId", Int),
        Column::new("ReceivedDate", Date),
        Column::new("TotalBags", Int),
        Column::new("TotalWeight", Decimal),
        Column::new("Remarks", Text),
    ],
    list_limit: None,
    lookups: &[Lookup {
        segment: "",
        columns: &["GRNNo", "SeasonId"],
    }],
};

pub static GRN_DETAILS: Entity = Entity {
    name: "GRN detail",
    path: "grn_details",
    table: "grn_details",
    key: "id",
    columns: &[
        Column::new("GrnMainId", Int).required(),
        Column::new("GradeId", Int),
        Column::new("Bags", Int),
        Column::new("Pockets", Int),
        Column::new("Weight", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};

pub static OUTTURNS: Entity = Entity {
    name: "Outturn",
    path: "outturns",
    table: "outturns",
    key: "OutturnId",
    columns: &[
        Column::new("OutturnNo", Text).required(),
        Column::new("SeasonId", Int).required(),
        Column::new("GrowerId", Int),
        Column::new("MillerId", Int),
        Column::new("MillingDate", Date),
        Column::new("TotalWeight", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};

pub static GRN_OUTTURNS: Entity = Entity {
    name: "GRN outturn",
    path: "grn_outturns",
    table: "grn_outturns",
    key: "id",
    columns: &[
        Column::new("GrnMainId", Int).required(),
        Column::new("OutturnId", Int).required(),
        Column::new("Weight", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};

pub static OUTTURN_GRADES: Entity = Entity {
    name: "Outturn grade",
    path: "outturn_grades",
    table: "outturn_grades",
    key: "id",
    columns: &[
        Column::new("OutturnId", Int).required(),
        Column::new("GradeId", Int).required(),
        Column::new("Bags", Int),
        Column::new("Pockets", Int),
        Column::new("Weight", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};

pub static WARRANTS: Entity = Entity {
    name: "Warrant",
    path: "warrants",
    table: "warrants",
    key: "WarrantId",
    columns: &[
        Column::new("WarrantNo", Text).required(),
        Column::new("OutturnNo", Text),
        Column::new("SeasonId", Int),
        Column::new("GradeId", Int),
        Column::new("GrnOutturnId", Int),
        Column::new("WarehouseId", Int),
        Column::new("Bags", Int),
        Column::new("Pockets", Int),
        Column::new("Weight", Decimal),
        Column::new("IssueDate", Date),
        Column::new("IsReleased", Flag),
    ],
    list_limit: None,
    lookups: &[
        Lookup {
            segment: "outturn",
            columns: &["OutturnNo", "SeasonId", "GradeId"],
        },
        Lookup {
            segment: "grnoutturn",
            columns: &["GrnOutturnId"],
        },
    ],
};

pub static BAGS: Entity = Entity {
    name: "Bag",
    path: "bags",
    table: "bags",
    key: "BagId",
    columns: &[
        Column::new("BagNo", Text).required(),
        Column::new("OutturnId", Int),
        Column::new("GradeId", Int),
        Column::new("BagTypeId", Int),
        Column::new("WarehouseId", Int),
        Column::new("Weight", Decimal),
    ],
    list_limit: Some(100),
    lookups: &[],
};

pub static DELIVERIES: Entity = Entity {
    name: "Delivery",
    path: "deliveries",
    table: "deliveries",
    key: "DeliveryId",
    columns: &[
        Column::new("GrowerId", Int).required(),
        Column::new("TransporterId", Int),
        Column::new("WarehouseId", Int),
        Column::new("DeliveryDate", Date),
        Column::new("Bags", Int),
        Column::new("Weight", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};
