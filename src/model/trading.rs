use super::ColumnType::*;
use super::{Column, Entity};

pub static AUCTIONS: Entity = Entity {
    name: "Auction",
    path: "auctions",
    table: "auctions",
    key: "AuctionId",
    columns: &[
        Column::new("AuctionNo", Text).required(),
        Column::new("SeasonId", Int).required(),
        Column::new("AuctionDate", Date),
        Column::new("Venue", Text),
        Column::new("Status", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static CATALOGUES: Entity = Entity {
    name: "Catalogue",
    path: "catalogues",
    table: "catalogues",
    key: "CatalogueId",
    columns: &[
        Column::new("AuctionId", Int).required(),
        Column::new("AgentId", Int),
        Column::new("CatalogueNo", Text),
        Column::new("PublishedDate", Date),
    ],
    list_limit: None,
    lookups: &[],
};

pub static LOTS: Entity = Entity {
    name: "Lot",
    path: "lots",
    table: "lots",
    key: "LotId",
    columns: &[
        Column::new("CatalogueId", Int).required(),
        Column::new("OutturnId", Int),
        Column::new("GradeId", Int),
        Column::new("LotNo", Text),
        Column::new("Bags", Int),
        Column::new("Pockets", Int),
        Column::new("NetWeight", Decimal),
        Column::new("ReservePrice", Decimal),
    ],
    list_limit: Some(100),
    lookups: &[],
};

pub static BIDS: Entity = Entity {
    name: "Bid",
    path: "bids",
    table: "bids",
    key: "BidId",
    columns: &[
        Column::new("LotId", Int).required(),
        Column::new("BuyerId", Int).required(),
        Column::new("BidPrice", Decimal).required(),
        Column::new("BidTime", DateTime),
    ],
    list_limit: Some(100),
    lookups: &[],
};

pub static SALES: Entity = Entity {
    name: "Sale",
    path: "sales",
    table: "sales",
    key: "SaleId",
    columns: &[
        Column::new("LotId", Int).required(),
        Column::new("BuyerId", Int).required(),
        Column::new("AuctionId", Int),
        Column::new("SalePrice", Decimal),
        Column::new("CurrencyId", Int),
        Column::new("SaleDate", Date),
        Column::new("Status", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static SAMPLES: Entity = Entity {
    name: "Sample",
    path: "samples",
    table: "samples",
    key: "SampleId",
    columns: &[
        Column::new("OutturnId", Int).required(),
        Column::new("GradeId", Int),
        Column::new("SampleDate", Date),
        Column::new("CupScore", Decimal),
        Column::new("Remarks", Text),
    ],
    list_limit: None,
    lookups: &[],
};
