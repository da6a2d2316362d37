//! Filter/Transform Pipeline: optional per-record stages applied before indexing.
//!
//! The filter runs first; a rejected record is dropped before duplicate detection.
//! The transform runs on accepted records and its output is what gets stored.

/// Predicate deciding whether a parsed record is kept.
pub type RowFilter<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Rewrite applied to every accepted record.
pub type RowTransform<R> = Box<dyn Fn(R) -> R + Send + Sync>;

/// Two optional stages; a missing stage accepts everything / leaves records unchanged.
///
/// # Example
///
/// ```rust
/// use imdbx_core::Pipeline;
/// use imdbx_core::loaders::Person;
///
/// let pipeline = Pipeline::<Person>::new()
///     .with_filter(|person| person.birth_year.is_some())
///     .with_transform(|mut person| {
///         person.known_for_titles = None;
///         person
///     });
/// assert!(pipeline.has_filter());
/// ```
pub struct Pipeline<R> {
    filter: Option<RowFilter<R>>,
    transform: Option<RowTransform<R>>,
}

impl<R> Pipeline<R> {
    pub fn new() -> Self {
        Self {
            filter: None,
            transform: None,
        }
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Runs the filter stage.
    pub fn accepts(&self, record: &R) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(record))
    }

    /// Runs the transform stage.
    pub fn transform(&self, record: R) -> R {
        match &self.transform {
            Some(transform) => transform(record),
            None => record,
        }
    }
}

impl<R> Default for Pipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for Pipeline<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("filter", &self.has_filter())
            .field("transform", &self.has_transform())
            .finish()
    }
}
