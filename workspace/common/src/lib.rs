//! Common transport-layer types shared between the backend and the compute
//! crate. These structs are the wire shapes the dashboard client sees, so
//! CRUD responses and report payloads deserialize to the same types.

mod report;

pub use report::{
    LegResult, LegType, ParlayDto, ParlayLegDto, ParlayStatus, ReportFilters, ReportStats,
};
