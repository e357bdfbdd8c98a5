pub mod dimension;
pub mod encoding;
pub mod font;
pub mod palette;
pub mod paragraph;
pub mod registry;
pub mod text;

pub use dimension::{inch, Margins, PageSize, INCH};
pub use encoding::{encode_win_ansi, win_ansi_byte};
pub use font::{FontFamily, StandardFont};
pub use paragraph::ParagraphStyle;
pub use registry::StyleRegistry;
pub use text::{TextAlign, VerticalAlign};
