//! Transaction document assembly.

use tracing::{debug, warn};

use super::envelope::transaction_envelope;
use super::fragment::FragmentBuilder;
use super::xml::XmlElement;
use super::{MissingPropertyPolicy, TransactionOperation};
use crate::config::LayerConfig;
use crate::feature::Feature;
use crate::wfs::error::BuildFailure;

/// A serialized transaction ready to be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDocument {
    operation: TransactionOperation,
    layer_name: String,
    root: XmlElement,
    xml: String,
    dropped: usize,
}

impl TransactionDocument {
    /// Operation carried by every fragment.
    pub fn operation(&self) -> TransactionOperation {
        self.operation
    }

    /// Target layer name.
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    /// The `wfs:Transaction` element tree.
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Fragments in input order.
    pub fn fragments(&self) -> impl Iterator<Item = &XmlElement> {
        self.root.child_elements()
    }

    /// Number of fragments in the document.
    pub fn fragment_count(&self) -> usize {
        self.root.child_elements().count()
    }

    /// Number of input features that produced no fragment.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Serialized request body.
    pub fn as_xml(&self) -> &str {
        &self.xml
    }

    /// Indented rendering for display.
    pub fn to_pretty_xml(&self) -> Result<String, BuildFailure> {
        self.root.to_pretty_xml()
    }
}

/// Builds transaction documents for one workspace.
#[derive(Debug, Clone, Copy)]
pub struct TransactionBuilder<'a> {
    layer: &'a LayerConfig,
    missing_property: MissingPropertyPolicy,
}

impl<'a> TransactionBuilder<'a> {
    /// Creates a builder using the default missing-property policy.
    pub fn new(layer: &'a LayerConfig) -> Self {
        Self {
            layer,
            missing_property: MissingPropertyPolicy::default(),
        }
    }

    /// Sets how absent properties are rendered.
    pub fn with_missing_property_policy(mut self, policy: MissingPropertyPolicy) -> Self {
        self.missing_property = policy;
        self
    }

    /// Builds one transaction covering all eligible features.
    ///
    /// # Errors
    ///
    /// - [`BuildFailure::EmptyInput`] when `features` is empty
    /// - [`BuildFailure::NothingToSubmit`] when no feature produced a
    ///   fragment (always the case for delete)
    pub fn build(
        &self,
        features: &[Feature],
        operation: TransactionOperation,
        layer_name: &str,
    ) -> Result<TransactionDocument, BuildFailure> {
        if features.is_empty() {
            return Err(BuildFailure::EmptyInput);
        }

        let fragments = FragmentBuilder::new(self.layer, layer_name, self.missing_property);
        let built: Vec<XmlElement> = features
            .iter()
            .filter_map(|feature| fragments.fragment(operation, feature))
            .collect();

        let dropped = features.len() - built.len();
        if dropped > 0 {
            warn!(
                layer = layer_name,
                operation = %operation,
                dropped = dropped,
                "Dropped features that cannot be written"
            );
        }

        if built.is_empty() {
            return Err(BuildFailure::NothingToSubmit { operation, dropped });
        }

        let root = transaction_envelope(self.layer, built);
        let xml = root.to_xml()?;

        debug!(
            layer = layer_name,
            operation = %operation,
            fragments = features.len() - dropped,
            bytes = xml.len(),
            "Built transaction document"
        );

        Ok(TransactionDocument {
            operation,
            layer_name: layer_name.to_string(),
            root,
            xml,
            dropped,
        })
    }
}
