//! Chroma Core
//!
//! Color primitives shared by the token pipeline and the code emitters:
//!
//! - **[`Argb`]**: a packed 32-bit color in alpha-red-green-blue byte order
//! - **Literal parsing**: `rgb()`/`rgba()` functional notation and 6/8 digit
//!   hex literals, see [`parse_color`]
//!
//! # Example
//!
//! ```rust
//! use chroma_core::{parse_color, Argb};
//!
//! let color = parse_color("rgba(255, 0, 0, 0.5)").unwrap();
//! assert_eq!(color, Argb::new(0x80, 0xFF, 0x00, 0x00));
//! assert_eq!(color.to_string(), "80FF0000");
//!
//! // Brace references are not colors
//! assert_eq!(parse_color("{wel.prim.color.blue.500}"), None);
//! ```

pub mod color;
pub mod parse;

pub use color::{Argb, ParseColorError};
pub use parse::{is_reference, parse_color};
