//! Diagram model assembly and the optional last-result memo.

use std::sync::Arc;

use hp_core::Real;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::classify::{Classifier, KindClassifier};
use crate::config::{ProfileConfig, Visibility};
use crate::element::Element;
use crate::error::ProfileResult;
use crate::flatten::{ComponentPosition, flatten};
use crate::flowing_hgl::{FlowingHgl, flowing_hgl};
use crate::route::{Segment, route_segments};
use crate::scale::Scale;
use crate::static_hgl::{StaticHgl, static_hgl};
use crate::validate;

/// A flattened component with its resolved pixel x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    #[serde(flatten)]
    pub position: ComponentPosition,
    pub x: Real,
}

/// Operating band whisker for a component with `min_el` and/or `max_el`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationBand {
    pub element_index: usize,
    pub id: String,
    pub x: Real,
    pub min_el: Option<Real>,
    pub max_el: Option<Real>,
}

/// Everything the drawing layer needs, resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramModel {
    pub components: Vec<PlacedComponent>,
    pub total_length: Real,
    pub scale: Scale,
    pub segments: Vec<Segment>,
    pub bands: Vec<ElevationBand>,
    pub static_hgl: Option<StaticHgl>,
    pub flowing_hgl: Option<FlowingHgl>,
    pub visibility: Visibility,
    pub config: ProfileConfig,
}

impl DiagramModel {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Pixel position of a data-space point.
    pub fn project(&self, x: Real, elevation: Real) -> (Real, Real) {
        (x, self.scale.y(elevation))
    }
}

/// Compute the diagram with the default [`KindClassifier`].
pub fn compute(elements: &[Element], config: &ProfileConfig) -> ProfileResult<DiagramModel> {
    compute_profile(elements, config, &KindClassifier)
}

/// Compute the full diagram model from an ordered element chain.
///
/// Fails only on malformed required data, naming the element.
pub fn compute_profile<C: Classifier>(
    elements: &[Element],
    config: &ProfileConfig,
    classifier: &C,
) -> ProfileResult<DiagramModel> {
    validate::validate_config(config)?;
    validate::validate_elements(elements)?;

    let flat = flatten(elements);
    let scale = Scale::build(&flat, elements, config);
    let segments = route_segments(elements, &flat, &scale);
    let static_line = static_hgl(&flat, &scale, classifier);
    let flowing = flowing_hgl(elements, &scale);

    let components: Vec<PlacedComponent> = flat
        .positions
        .iter()
        .enumerate()
        .map(|(i, position)| PlacedComponent {
            position: position.clone(),
            x: scale.x(i),
        })
        .collect();

    let bands = components
        .iter()
        .filter(|p| p.position.component.min_el.is_some() || p.position.component.max_el.is_some())
        .map(|p| ElevationBand {
            element_index: p.position.element_index,
            id: p.position.component.id.clone(),
            x: p.x,
            min_el: p.position.component.min_el,
            max_el: p.position.component.max_el,
        })
        .collect();

    debug!(
        elements = elements.len(),
        components = components.len(),
        segments = segments.len(),
        total_length = flat.total_length,
        min_el = scale.min_el,
        max_el = scale.max_el,
        static_hgl = static_line.is_some(),
        flowing_hgl = flowing.is_some(),
        "computed profile"
    );

    Ok(DiagramModel {
        components,
        total_length: flat.total_length,
        scale,
        segments,
        bands,
        static_hgl: static_line,
        flowing_hgl: flowing,
        visibility: config.visibility,
        config: config.clone(),
    })
}

/// Memo of the last computed model, keyed on the full input.
///
/// Holding one makes repeated renders with unchanged input free; results
/// are identical with or without it.
#[derive(Debug, Default)]
pub struct ProfileCache<C = KindClassifier> {
    classifier: C,
    last: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    elements: Vec<Element>,
    config: ProfileConfig,
    model: Arc<DiagramModel>,
}

impl ProfileCache<KindClassifier> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Classifier> ProfileCache<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            last: None,
        }
    }

    /// Return the cached model when the input is unchanged, else recompute.
    pub fn get(&mut self, elements: &[Element], config: &ProfileConfig) -> ProfileResult<Arc<DiagramModel>> {
        if let Some(entry) = &self.last
            && entry.elements == elements
            && entry.config == *config
        {
            trace!("profile cache hit");
            return Ok(Arc::clone(&entry.model));
        }

        let model = Arc::new(compute_profile(elements, config, &self.classifier)?);
        self.last = Some(CacheEntry {
            elements: elements.to_vec(),
            config: config.clone(),
            model: Arc::clone(&model),
        });
        Ok(model)
    }

    /// Drop the memoized result.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
