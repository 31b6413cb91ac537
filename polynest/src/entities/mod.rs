mod layout;
mod part;
mod placement;
mod sheet;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use layout::SkippedPart;

#[doc(inline)]
pub use part::BufferedPart;

#[doc(inline)]
pub use part::Part;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use sheet::Sheet;
