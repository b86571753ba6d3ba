use serde::{Deserialize, Serialize};

// ============================================================================
// PRESENTATION
// ============================================================================

/// A presentation as returned by the document service.
///
/// Only the identifier is required; a create response without one is
/// rejected while decoding instead of surfacing later as an empty id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub presentation_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub page_elements: Vec<serde_json::Value>,
}

/// Reply envelope of a batch update. Individual replies stay opaque.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub presentation_id: Option<String>,
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
}

/// What the creation flow hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDeck {
    pub presentation_id: String,
    pub presentation_url: String,
    pub slides_created: usize,
}

// ============================================================================
// MUTATION OPERATIONS
// ============================================================================

/// One entry of a batch update.
///
/// Serializes in the externally tagged shape the document service expects,
/// e.g. `{"createSlide": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideMutation {
    CreateSlide(CreateSlide),
    CreateShape(CreateShape),
    InsertText(InsertText),
    UpdateTextStyle(UpdateTextStyle),
}

impl SlideMutation {
    /// The object this operation creates, if it creates one.
    pub fn created_id(&self) -> Option<&str> {
        match self {
            SlideMutation::CreateSlide(op) => Some(&op.object_id),
            SlideMutation::CreateShape(op) => Some(&op.object_id),
            SlideMutation::InsertText(_) | SlideMutation::UpdateTextStyle(_) => None,
        }
    }

    /// The existing object this operation points at, if any.
    pub fn referenced_id(&self) -> Option<&str> {
        match self {
            SlideMutation::CreateSlide(_) => None,
            SlideMutation::CreateShape(op) => Some(&op.element_properties.page_object_id),
            SlideMutation::InsertText(op) => Some(&op.object_id),
            SlideMutation::UpdateTextStyle(op) => Some(&op.object_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlide {
    pub object_id: String,
    pub insertion_index: usize,
    pub slide_layout_reference: LayoutReference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReference {
    pub predefined_layout: PredefinedLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredefinedLayout {
    Blank,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShape {
    pub object_id: String,
    pub shape_type: ShapeType,
    pub element_properties: PageElementProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    TextBox,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElementProperties {
    pub page_object_id: String,
    pub size: Size,
    pub transform: AffineTransform,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn pt(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    Pt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    pub object_id: String,
    pub insertion_index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyle {
    pub object_id: String,
    pub style: TextStyle,
    /// Field mask; only the named style attributes are touched.
    pub fields: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
}
