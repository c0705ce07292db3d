//! Building live skin trees from declarations.
//!
//! A [`NodeDecl`] is what a markup front end produces for one element: its
//! kind, its raw attributes, its script attachments and its children. The
//! [`SkinBuilder`] turns a declaration tree into objects, applying attributes
//! through each object's resolver chain.
//!
//! Declarations are serde types, so a skin can also be written as TOML:
//!
//! ```toml
//! [root]
//! kind = "group"
//! attributes = { id = "main", maximum_w = "200" }
//!
//! [[root.scripts]]
//! attributes = { id = "main.script", file = "scripts/main.maki" }
//!
//! [[root.children]]
//! kind = "layer"
//! attributes = { id = "play", image = "player.play" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use veneer_core::BuildConfig;

use crate::error::{BuildError, BuildResult};
use crate::group::Group;
use crate::key::KeyAllocator;
use crate::layer::Layer;
use crate::layout::Layout;
use crate::object::GuiObject;
use crate::system::{NoopScript, ScriptHook, SystemObject};

/// One declared element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDecl {
    /// Element kind: `group`, `layout` or `layer` (any case).
    pub kind: String,
    /// Raw attributes, applied in key order.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Script attachments, in attachment order.
    #[serde(default)]
    pub scripts: Vec<ScriptDecl>,
    /// Child elements, in declaration order.
    #[serde(default)]
    pub children: Vec<NodeDecl>,
}

impl NodeDecl {
    /// Creates a declaration with no attributes or children.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Adds a child declaration.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a script attachment.
    #[must_use]
    pub fn script(mut self, script: ScriptDecl) -> Self {
        self.scripts.push(script);
        self
    }
}

/// One declared script attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDecl {
    /// Raw attributes (`id`, `file`, `param`).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ScriptDecl {
    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Declared script file, looked up case-insensitively.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("file"))
            .map(|(_, value)| value.as_str())
    }
}

/// A skin document: one root declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinDocument {
    /// Root element.
    pub root: NodeDecl,
}

impl SkinDocument {
    /// Parses a document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Parse`] if the text does not match the schema.
    pub fn from_toml_str(text: &str) -> BuildResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a document file.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Io`] if the file cannot be read and
    /// [`BuildError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> BuildResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Supplies the behavior for declared scripts.
pub trait ScriptFactory {
    /// Creates the hook for one script declaration.
    fn create(&mut self, decl: &ScriptDecl) -> Box<dyn ScriptHook>;
}

impl<F> ScriptFactory for F
where
    F: FnMut(&ScriptDecl) -> Box<dyn ScriptHook>,
{
    fn create(&mut self, decl: &ScriptDecl) -> Box<dyn ScriptHook> {
        self(decl)
    }
}

/// Builds live objects from declarations.
pub struct SkinBuilder {
    config: BuildConfig,
    keys: KeyAllocator,
    scripts: Box<dyn ScriptFactory>,
}

impl SkinBuilder {
    /// Creates a builder whose scripts do nothing.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            keys: KeyAllocator::new(),
            scripts: Box::new(|_: &ScriptDecl| Box::new(NoopScript) as Box<dyn ScriptHook>),
        }
    }

    /// Uses `factory` to create script hooks.
    #[must_use]
    pub fn with_scripts(mut self, factory: impl ScriptFactory + 'static) -> Self {
        self.scripts = Box::new(factory);
        self
    }

    /// Keys issued so far, across every tree this builder produced.
    #[must_use]
    pub const fn keys_issued(&self) -> u64 {
        self.keys.issued()
    }

    /// Builds the tree rooted at `decl`.
    ///
    /// # Errors
    ///
    /// Fails on unknown element kinds (the root always, nested elements only
    /// when `strict_elements` is set), on children declared under a leaf, and
    /// on malformed attribute values.
    pub fn build(&mut self, decl: &NodeDecl) -> BuildResult<Box<dyn GuiObject>> {
        match self.build_node(decl)? {
            Some(node) => Ok(node),
            None => Err(BuildError::UnknownElement {
                kind: decl.kind.clone(),
            }),
        }
    }

    /// Builds the root of a parsed document.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_document(&mut self, document: &SkinDocument) -> BuildResult<Box<dyn GuiObject>> {
        self.build(&document.root)
    }

    fn build_node(&mut self, decl: &NodeDecl) -> BuildResult<Option<Box<dyn GuiObject>>> {
        let key = self.keys.next_key();
        let mut node: Box<dyn GuiObject> = match decl.kind.to_lowercase().as_str() {
            "group" => Box::new(Group::new(key)),
            "layout" => Box::new(Layout::new(key)),
            "layer" => Box::new(Layer::new(key)),
            _ if self.config.strict_elements => {
                return Err(BuildError::UnknownElement {
                    kind: decl.kind.clone(),
                });
            }
            _ => {
                tracing::warn!("Skipping unknown element <{}>", decl.kind);
                return Ok(None);
            }
        };

        for (attr, value) in &decl.attributes {
            node.set_attribute(attr, value)
                .map_err(|source| BuildError::Attribute {
                    element: decl.kind.clone(),
                    key: attr.clone(),
                    source,
                })?;
        }

        if decl.scripts.is_empty() && decl.children.is_empty() {
            return Ok(Some(node));
        }
        let Some(group) = node.as_group_mut() else {
            return Err(BuildError::NotAContainer {
                kind: decl.kind.clone(),
            });
        };

        for script in &decl.scripts {
            let mut system = SystemObject::new(self.keys.next_key(), self.scripts.create(script));
            for (attr, value) in &script.attributes {
                system
                    .set_attribute(attr, value)
                    .map_err(|source| BuildError::Attribute {
                        element: "script".to_owned(),
                        key: attr.clone(),
                        source,
                    })?;
            }
            group.add_system_object(system);
        }
        for child in &decl.children {
            if let Some(child) = self.build_node(child)? {
                group.add_child(child);
            }
        }
        tracing::debug!(
            "Built <{}> \"{}\" with {} children",
            decl.kind,
            group.id(),
            group.children().len()
        );
        Ok(Some(node))
    }
}

impl Default for SkinBuilder {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}
