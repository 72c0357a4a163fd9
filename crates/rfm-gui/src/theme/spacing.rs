//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Large radius - modals, dialogs
pub const BORDER_RADIUS_LG: f32 = 8.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Medium modal width
pub const MODAL_WIDTH_MD: f32 = 520.0;

/// Tallest modal body before it scrolls
pub const MODAL_BODY_MAX_HEIGHT: f32 = 560.0;

/// Table cell horizontal padding
pub const TABLE_CELL_PADDING_X: f32 = 12.0;

/// Table cell vertical padding
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;
