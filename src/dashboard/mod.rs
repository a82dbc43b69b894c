//! # Dashboard Projection
//!
//! Pure mapping from ingested runs and live status snapshots onto the named
//! display fields the rendering surface shows. No parsing happens here.
//!
//! Only one ingestion is held at a time. Loading a new one bumps a generation
//! counter, and a render requested for an older generation is discarded
//! instead of being drawn over the new data.

mod controls;
mod status;
mod view;


pub use controls::SensorControls;
pub use status::{StatusField, StatusPanel, StatusTone, LAST_UPDATED_FORMAT};
pub use view::{Dashboard, DatasetView, RenderFrame, RenderTicket, DEFAULT_DOSE_UNIT};
