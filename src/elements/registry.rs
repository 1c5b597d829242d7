use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::ChartOptions;
use crate::elements::ChartElement;
use crate::error::{ChartError, ChartResult};
use crate::render::Canvas;

/// Insertion-ordered set of elements a host draws in one pass.
///
/// `IndexMap` keeps draw order equal to registration order.
#[derive(Default)]
pub struct ElementRegistry {
    elements: IndexMap<String, Box<dyn ChartElement>>,
}

impl ElementRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        element: Box<dyn ChartElement>,
    ) -> ChartResult<()> {
        let id = id.into();
        if self.elements.contains_key(&id) {
            return Err(ChartError::DuplicateElement(id));
        }
        debug!(element = %id, kind = element.kind(), "registered chart element");
        self.elements.insert(id, element);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<Box<dyn ChartElement>> {
        self.elements.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn ChartElement> {
        self.elements.get(id).map(|element| element.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Draws every element in registration order.
    ///
    /// Stops at the first failing element and returns its error.
    pub fn draw_all(&self, canvas: &mut dyn Canvas, options: &ChartOptions) -> ChartResult<()> {
        for (id, element) in &self.elements {
            if let Err(err) = element.draw(canvas, options) {
                warn!(
                    element = %id,
                    kind = element.kind(),
                    error = %err,
                    "chart element draw failed"
                );
                return Err(err);
            }
        }
        debug!(count = self.elements.len(), "drew chart elements");
        Ok(())
    }

    /// Ids of the elements whose hit area contains `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, element)| element.in_range(x, y))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

impl std::fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("ids", &self.elements.keys().collect::<Vec<_>>())
            .finish()
    }
}
