use serde::{Deserialize, Serialize};

use crate::id::FieldId;
use crate::kind::{FieldKind, LabelStyle};

/// Placeholder given to new text fields.
pub const DEFAULT_TEXT_PLACEHOLDER: &str = "Enter your answer...";

/// Placeholder given to new number fields.
pub const DEFAULT_NUMBER_PLACEHOLDER: &str = "Enter a number...";

/// Options given to new dropdown fields.
pub const DEFAULT_ENUM_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Identity and position shared by every field kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Unique id of the field within its template.
    pub id: FieldId,

    /// Display name. Also drives the heuristic number policy.
    #[serde(default)]
    pub label: String,

    /// Zero-based position within the owning section.
    #[serde(default)]
    pub order: usize,
}

impl FieldMetadata {
    /// Create metadata with a fresh id at position zero.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: FieldId::v4(),
            label: label.into(),
            order: 0,
        }
    }
}

/// Display-only heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default)]
    pub label_style: LabelStyle,
}

impl LabelField {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(label),
            label_style: LabelStyle::default(),
        }
    }
}

/// Free-text answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TextField {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(label),
            required: false,
            placeholder: Some(DEFAULT_TEXT_PLACEHOLDER.to_owned()),
        }
    }
}

/// Numeric answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl NumberField {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(label),
            required: false,
            placeholder: Some(DEFAULT_NUMBER_PLACEHOLDER.to_owned()),
        }
    }
}

/// Yes/No answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default)]
    pub required: bool,
}

impl BooleanField {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(label),
            required: false,
        }
    }
}

/// Dropdown over a fixed, ordered list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub options: Vec<String>,
}

impl EnumField {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(label),
            required: false,
            options: DEFAULT_ENUM_OPTIONS.iter().map(|&o| o.to_owned()).collect(),
        }
    }
}

/// A concrete field definition, tagged by type.
///
/// The `type` field in JSON determines which variant is used during
/// deserialization, so an unknown type never reaches validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldDef {
    Label(LabelField),
    Text(TextField),
    Number(NumberField),
    Boolean(BooleanField),
    Enum(EnumField),
}

macro_rules! delegate_metadata {
    ($self:ident, $p:ident => $expr:expr) => {
        match $self {
            Self::Label($p) => $expr,
            Self::Text($p) => $expr,
            Self::Number($p) => $expr,
            Self::Boolean($p) => $expr,
            Self::Enum($p) => $expr,
        }
    };
}

impl FieldDef {
    /// A field of the given kind with its default attributes.
    #[must_use]
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        match kind {
            FieldKind::Label => Self::Label(LabelField::new(label)),
            FieldKind::Text => Self::Text(TextField::new(label)),
            FieldKind::Number => Self::Number(NumberField::new(label)),
            FieldKind::Boolean => Self::Boolean(BooleanField::new(label)),
            FieldKind::Enum => Self::Enum(EnumField::new(label)),
        }
    }

    /// A field as dropped from the palette: default attributes and a
    /// placeholder label (`"Yes/No"` for boolean fields).
    #[must_use]
    pub fn from_palette(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Boolean => Self::new(kind, "Yes/No"),
            _ => Self::new(kind, format!("New {kind} field")),
        }
    }

    #[must_use]
    pub fn label_field(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Label, label)
    }

    #[must_use]
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Text, label)
    }

    #[must_use]
    pub fn number(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Number, label)
    }

    #[must_use]
    pub fn boolean(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Boolean, label)
    }

    /// A dropdown with exactly the given options.
    #[must_use]
    pub fn dropdown(
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Enum(EnumField {
            options: options.into_iter().map(Into::into).collect(),
            ..EnumField::new(label)
        })
    }

    /// Marks the field as required. No effect on labels.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.set_required(true);
        self
    }

    /// Replaces the placeholder. No effect on kinds without one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        match &mut self {
            Self::Text(p) => p.placeholder = Some(placeholder.into()),
            Self::Number(p) => p.placeholder = Some(placeholder.into()),
            _ => {}
        }
        self
    }

    /// Sets the heading size. No effect on non-label kinds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        if let Self::Label(p) = &mut self {
            p.label_style = style;
        }
        self
    }

    /// Access the identity and position of this field.
    #[must_use]
    pub const fn metadata(&self) -> &FieldMetadata {
        delegate_metadata!(self, p => &p.metadata)
    }

    /// Mutable access to the identity and position of this field.
    pub fn metadata_mut(&mut self) -> &mut FieldMetadata {
        delegate_metadata!(self, p => &mut p.metadata)
    }

    #[must_use]
    pub const fn id(&self) -> FieldId {
        self.metadata().id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.metadata().label
    }

    #[must_use]
    pub const fn order(&self) -> usize {
        self.metadata().order
    }

    pub fn set_order(&mut self, order: usize) {
        self.metadata_mut().order = order;
    }

    /// The field kind, matching the serialized `type` tag.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Label(_) => FieldKind::Label,
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Enum(_) => FieldKind::Enum,
        }
    }

    /// Whether a value must be provided. Labels are never required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        match self {
            Self::Label(_) => false,
            Self::Text(p) => p.required,
            Self::Number(p) => p.required,
            Self::Boolean(p) => p.required,
            Self::Enum(p) => p.required,
        }
    }

    pub fn set_required(&mut self, required: bool) {
        match self {
            Self::Label(_) => {}
            Self::Text(p) => p.required = required,
            Self::Number(p) => p.required = required,
            Self::Boolean(p) => p.required = required,
            Self::Enum(p) => p.required = required,
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Text(p) => p.placeholder.as_deref(),
            Self::Number(p) => p.placeholder.as_deref(),
            _ => None,
        }
    }

    /// Dropdown options, `None` for every other kind.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Enum(p) => Some(&p.options),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label_style(&self) -> Option<LabelStyle> {
        match self {
            Self::Label(p) => Some(p.label_style),
            _ => None,
        }
    }
}
