// Turns flat bullet lists into ordered batches of slide mutations.
//
// Ordering rule for every batch produced here: an object is created before
// any operation refers to it, and every id comes from the injected generator
// so the creating and referencing operations always agree.

use super::slides_models::{
    AffineTransform, CreateShape, CreateSlide, Dimension, InsertText, LayoutReference,
    PageElementProperties, PredefinedLayout, ShapeType, Size, SlideMutation, TextStyle, Unit,
    UpdateTextStyle,
};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::atomic::{AtomicU64, Ordering};

/// Font size applied to every generated bullet text box.
pub const BULLET_FONT_SIZE_PT: f64 = 24.0;

// ============================================================================
// OBJECT IDS
// ============================================================================

/// Source of object ids for new slides and shapes.
pub trait ObjectIdGenerator: Send + Sync {
    /// Returns an id never handed out before by this generator.
    fn next_id(&self, kind: &str) -> String;
}

/// `{kind}_{seed}_{n}` ids from a monotonic counter.
///
/// The seed is random per generator so ids from two processes writing into
/// the same presentation do not collide.
pub struct SequentialIds {
    seed: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        let seed: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectIdGenerator for SequentialIds {
    fn next_id(&self, kind: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}_{}_{}", kind, self.seed, n)
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Size and offset of a text box, in points from the slide origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBoxGeometry {
    pub width: f64,
    pub height: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl TextBoxGeometry {
    /// Used for the one-box-per-bullet slides.
    pub const BULLET: TextBoxGeometry = TextBoxGeometry {
        width: 600.0,
        height: 400.0,
        translate_x: 60.0,
        translate_y: 100.0,
    };

    /// Used when adding free text to an existing slide.
    pub const NOTE: TextBoxGeometry = TextBoxGeometry {
        width: 600.0,
        height: 300.0,
        translate_x: 50.0,
        translate_y: 100.0,
    };
}

// ============================================================================
// BUILDER
// ============================================================================

pub struct BatchBuilder<G: ObjectIdGenerator = SequentialIds> {
    ids: G,
}

impl<G: ObjectIdGenerator> BatchBuilder<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// One blank slide with one styled text box per bullet.
    ///
    /// Slides are inserted from index 1: a fresh presentation already has a
    /// default slide at index 0. An empty input yields an empty batch, which
    /// callers should not submit.
    pub fn creation_batch(&self, bullets: &[String]) -> Vec<SlideMutation> {
        let mut requests = Vec::with_capacity(bullets.len() * 4);

        for (i, bullet) in bullets.iter().enumerate() {
            let slide_id = self.ids.next_id("slide");
            let text_box_id = self.ids.next_id("textbox");

            requests.push(SlideMutation::CreateSlide(CreateSlide {
                object_id: slide_id.clone(),
                insertion_index: i + 1,
                slide_layout_reference: LayoutReference {
                    predefined_layout: PredefinedLayout::Blank,
                },
            }));
            requests.extend(text_box(
                &text_box_id,
                &slide_id,
                bullet,
                TextBoxGeometry::BULLET,
            ));
            requests.push(SlideMutation::UpdateTextStyle(UpdateTextStyle {
                object_id: text_box_id,
                style: TextStyle {
                    font_size: Some(Dimension::pt(BULLET_FONT_SIZE_PT)),
                },
                fields: "fontSize".to_string(),
            }));
        }

        requests
    }

    /// A text box on an existing slide. Returns the new shape's id with the
    /// batch that creates and fills it.
    pub fn text_box_batch(
        &self,
        slide_id: &str,
        text: &str,
        geometry: TextBoxGeometry,
    ) -> (String, Vec<SlideMutation>) {
        let text_box_id = self.ids.next_id("textbox");
        let requests = text_box(&text_box_id, slide_id, text, geometry).to_vec();
        (text_box_id, requests)
    }
}

fn text_box(
    text_box_id: &str,
    slide_id: &str,
    text: &str,
    geometry: TextBoxGeometry,
) -> [SlideMutation; 2] {
    [
        SlideMutation::CreateShape(CreateShape {
            object_id: text_box_id.to_string(),
            shape_type: ShapeType::TextBox,
            element_properties: PageElementProperties {
                page_object_id: slide_id.to_string(),
                size: Size {
                    width: Dimension::pt(geometry.width),
                    height: Dimension::pt(geometry.height),
                },
                transform: AffineTransform {
                    scale_x: 1.0,
                    scale_y: 1.0,
                    translate_x: geometry.translate_x,
                    translate_y: geometry.translate_y,
                    unit: Unit::Pt,
                },
            },
        }),
        SlideMutation::InsertText(InsertText {
            object_id: text_box_id.to_string(),
            insertion_index: 0,
            text: text.to_string(),
        }),
    ]
}
