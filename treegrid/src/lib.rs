pub mod buffer;
pub mod event;
pub mod id;
pub mod layout;
pub mod page;
pub mod render;
pub mod row;
pub mod stripe;
pub mod table;
pub mod terminal;
pub mod text;
pub mod toggle;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{process_events, Event, Key, Modifiers};
pub use id::{ParseRowIdError, RowId};
pub use layout::{layout, Rect, RowLine, TableLayout, HEADER_ROWS};
pub use page::{Document, PageInfo};
pub use render::render_to_buffer;
pub use row::{Indicator, Row, Stripe};
pub use stripe::restripe;
pub use table::Table;
pub use terminal::Terminal;
pub use toggle::toggle;
pub use types::*;
