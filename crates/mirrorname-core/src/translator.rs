//! Virtual-to-host name translation.

use std::fmt;

use crate::concat::{safe_concat_name, DEFAULT_MAX_LENGTH, MIN_MAX_LENGTH};
use crate::errors::NameError;

/// Origin of a mirrored object: `name` in `namespace` of the virtual cluster
/// `cluster_name`. An empty namespace marks a cluster-scoped object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    cluster_name: String,
    namespace: String,
    name: String,
}

impl Identity {
    pub fn new(
        cluster_name: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.namespace.is_empty()
    }

    fn segments(&self) -> Vec<&str> {
        if self.is_cluster_scoped() {
            vec![self.name.as_str(), self.cluster_name.as_str()]
        } else {
            vec![
                self.name.as_str(),
                self.namespace.as_str(),
                self.cluster_name.as_str(),
            ]
        }
    }

    /// Human-readable head of the host name: `name-namespace-cluster`.
    pub fn prefix(&self) -> String {
        self.segments().join("-")
    }

    /// Unambiguous key `name+namespace+cluster`; `+` never occurs in object names.
    pub fn key(&self) -> String {
        self.segments().join("+")
    }

    /// Lowercase hex of [`Identity::key`], always label-safe.
    pub fn suffix(&self) -> String {
        hex::encode(self.key())
    }

    /// Host object name within a `max_length` budget.
    pub fn host_name(&self, max_length: usize) -> String {
        safe_concat_name(max_length, &[self.prefix(), self.suffix()])
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cluster_scoped() {
            write!(f, "{}:{}", self.cluster_name, self.name)
        } else {
            write!(f, "{}:{}/{}", self.cluster_name, self.namespace, self.name)
        }
    }
}

/// Derives host-cluster object names for one virtual cluster.
///
/// Translation is pure: equal inputs on translators with the same cluster name and
/// budget always give the same name, so names can be recomputed instead of stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTranslator {
    cluster_name: String,
    host_namespace: Option<String>,
    max_length: usize,
}

impl NameTranslator {
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            host_namespace: None,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Namespace in the host cluster that receives the mirrored objects.
    /// Does not take part in name derivation.
    pub fn with_host_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.host_namespace = Some(namespace.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Result<Self, NameError> {
        if max_length < MIN_MAX_LENGTH {
            return Err(NameError::MaxLengthTooSmall {
                got: max_length,
                min: MIN_MAX_LENGTH,
            });
        }
        self.max_length = max_length;
        Ok(self)
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn host_namespace(&self) -> Option<&str> {
        self.host_namespace.as_deref()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn identity(&self, namespace: &str, name: &str) -> Identity {
        Identity::new(self.cluster_name.as_str(), namespace, name)
    }

    /// Host object name for `name` in `namespace` of this translator's cluster.
    ///
    /// The result is `name-namespace-cluster-<hex(name+namespace+cluster)>`, shortened
    /// with a digest when it does not fit the budget. Inputs are not validated; label
    /// safety of the result relies on the segments being label-safe themselves.
    pub fn translate_name(&self, namespace: &str, name: &str) -> String {
        let identity = self.identity(namespace, name);
        let host_name = identity.host_name(self.max_length);
        tracing::trace!(%identity, host_name = %host_name, "translated name");
        host_name
    }
}
