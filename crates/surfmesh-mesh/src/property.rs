//! Typed per-element property storage.
//!
//! A property is a named array with one slot per element of its kind.
//! Value types form a closed set ([`PropertyType`]); each array is
//! stored as a plain `Vec` of its concrete type inside the
//! [`PropertyArray`] tagged variant, so storage stays statically typed
//! while properties can still be attached at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};
use surfmesh_math::Vec3;
use surfmesh_types::{ElementKind, Scalar};

/// The value types a property may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Bool,
    Int,
    Scalar,
    Vec2,
    Vec3,
    /// RGBA color, components in `[0, 1]`.
    Color,
}

impl PropertyType {
    pub fn name(self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Scalar => "scalar",
            PropertyType::Vec2 => "vec2",
            PropertyType::Vec3 => "vec3",
            PropertyType::Color => "color",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single property value, tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Scalar(Scalar),
    Vec2([Scalar; 2]),
    Vec3([Scalar; 3]),
    Color([Scalar; 4]),
}

impl PropertyValue {
    /// The type tag of this value.
    pub fn value_type(&self) -> PropertyType {
        match self {
            PropertyValue::Bool(_) => PropertyType::Bool,
            PropertyValue::Int(_) => PropertyType::Int,
            PropertyValue::Scalar(_) => PropertyType::Scalar,
            PropertyValue::Vec2(_) => PropertyType::Vec2,
            PropertyValue::Vec3(_) => PropertyType::Vec3,
            PropertyValue::Color(_) => PropertyType::Color,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<Scalar> for PropertyValue {
    fn from(v: Scalar) -> Self {
        PropertyValue::Scalar(v)
    }
}

impl From<[Scalar; 2]> for PropertyValue {
    fn from(v: [Scalar; 2]) -> Self {
        PropertyValue::Vec2(v)
    }
}

impl From<[Scalar; 3]> for PropertyValue {
    fn from(v: [Scalar; 3]) -> Self {
        PropertyValue::Vec3(v)
    }
}

impl From<[Scalar; 4]> for PropertyValue {
    fn from(v: [Scalar; 4]) -> Self {
        PropertyValue::Color(v)
    }
}

impl From<Vec3> for PropertyValue {
    fn from(v: Vec3) -> Self {
        PropertyValue::Vec3(v.to_array())
    }
}

/// Backing storage for one property, one slot per element.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyArray {
    Bool(Vec<bool>),
    Int(Vec<i32>),
    Scalar(Vec<Scalar>),
    Vec2(Vec<[Scalar; 2]>),
    Vec3(Vec<[Scalar; 3]>),
    Color(Vec<[Scalar; 4]>),
}

impl PropertyArray {
    /// Allocates `len` slots, each set to `value`.
    pub fn filled(value: PropertyValue, len: usize) -> Self {
        match value {
            PropertyValue::Bool(v) => PropertyArray::Bool(vec![v; len]),
            PropertyValue::Int(v) => PropertyArray::Int(vec![v; len]),
            PropertyValue::Scalar(v) => PropertyArray::Scalar(vec![v; len]),
            PropertyValue::Vec2(v) => PropertyArray::Vec2(vec![v; len]),
            PropertyValue::Vec3(v) => PropertyArray::Vec3(vec![v; len]),
            PropertyValue::Color(v) => PropertyArray::Color(vec![v; len]),
        }
    }

    pub fn value_type(&self) -> PropertyType {
        match self {
            PropertyArray::Bool(_) => PropertyType::Bool,
            PropertyArray::Int(_) => PropertyType::Int,
            PropertyArray::Scalar(_) => PropertyType::Scalar,
            PropertyArray::Vec2(_) => PropertyType::Vec2,
            PropertyArray::Vec3(_) => PropertyType::Vec3,
            PropertyArray::Color(_) => PropertyType::Color,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PropertyArray::Bool(v) => v.len(),
            PropertyArray::Int(v) => v.len(),
            PropertyArray::Scalar(v) => v.len(),
            PropertyArray::Vec2(v) => v.len(),
            PropertyArray::Vec3(v) => v.len(),
            PropertyArray::Color(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value in slot `i`, or `None` when out of range.
    pub fn get(&self, i: usize) -> Option<PropertyValue> {
        match self {
            PropertyArray::Bool(v) => v.get(i).copied().map(PropertyValue::Bool),
            PropertyArray::Int(v) => v.get(i).copied().map(PropertyValue::Int),
            PropertyArray::Scalar(v) => v.get(i).copied().map(PropertyValue::Scalar),
            PropertyArray::Vec2(v) => v.get(i).copied().map(PropertyValue::Vec2),
            PropertyArray::Vec3(v) => v.get(i).copied().map(PropertyValue::Vec3),
            PropertyArray::Color(v) => v.get(i).copied().map(PropertyValue::Color),
        }
    }

    /// Writes slot `i`.
    ///
    /// Returns `false` without writing if `value` has a different type
    /// or `i` is out of range.
    pub fn set(&mut self, i: usize, value: PropertyValue) -> bool {
        fn put<T>(slots: &mut Vec<T>, i: usize, v: T) -> bool {
            match slots.get_mut(i) {
                Some(slot) => {
                    *slot = v;
                    true
                }
                None => false,
            }
        }

        match (self, value) {
            (PropertyArray::Bool(s), PropertyValue::Bool(v)) => put(s, i, v),
            (PropertyArray::Int(s), PropertyValue::Int(v)) => put(s, i, v),
            (PropertyArray::Scalar(s), PropertyValue::Scalar(v)) => put(s, i, v),
            (PropertyArray::Vec2(s), PropertyValue::Vec2(v)) => put(s, i, v),
            (PropertyArray::Vec3(s), PropertyValue::Vec3(v)) => put(s, i, v),
            (PropertyArray::Color(s), PropertyValue::Color(v)) => put(s, i, v),
            _ => false,
        }
    }

    /// Grows or shrinks to `len` slots, padding with `fill`.
    ///
    /// `fill` must have the array's type; a mismatched fill leaves
    /// the array untouched.
    pub fn resize(&mut self, len: usize, fill: PropertyValue) {
        match (self, fill) {
            (PropertyArray::Bool(s), PropertyValue::Bool(v)) => s.resize(len, v),
            (PropertyArray::Int(s), PropertyValue::Int(v)) => s.resize(len, v),
            (PropertyArray::Scalar(s), PropertyValue::Scalar(v)) => s.resize(len, v),
            (PropertyArray::Vec2(s), PropertyValue::Vec2(v)) => s.resize(len, v),
            (PropertyArray::Vec3(s), PropertyValue::Vec3(v)) => s.resize(len, v),
            (PropertyArray::Color(s), PropertyValue::Color(v)) => s.resize(len, v),
            _ => {}
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        match self {
            PropertyArray::Bool(v) => v.reserve(additional),
            PropertyArray::Int(v) => v.reserve(additional),
            PropertyArray::Scalar(v) => v.reserve(additional),
            PropertyArray::Vec2(v) => v.reserve(additional),
            PropertyArray::Vec3(v) => v.reserve(additional),
            PropertyArray::Color(v) => v.reserve(additional),
        }
    }
}

/// Rust types that can be viewed as a typed property slice.
///
/// Implemented for exactly the storage types of [`PropertyType`].
pub trait PropertyElement: Copy + sealed::Sealed {
    const TYPE: PropertyType;

    fn slice(array: &PropertyArray) -> Option<&[Self]>;

    fn slice_mut(array: &mut PropertyArray) -> Option<&mut [Self]>;

    /// Unwraps a tagged value of this type.
    fn from_value(value: PropertyValue) -> Option<Self>;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_property_element {
    ($ty:ty, $variant:ident) => {
        impl sealed::Sealed for $ty {}

        impl PropertyElement for $ty {
            const TYPE: PropertyType = PropertyType::$variant;

            fn slice(array: &PropertyArray) -> Option<&[Self]> {
                match array {
                    PropertyArray::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }

            fn slice_mut(array: &mut PropertyArray) -> Option<&mut [Self]> {
                match array {
                    PropertyArray::$variant(v) => Some(v.as_mut_slice()),
                    _ => None,
                }
            }

            fn from_value(value: PropertyValue) -> Option<Self> {
                match value {
                    PropertyValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_property_element!(bool, Bool);
impl_property_element!(i32, Int);
impl_property_element!(Scalar, Scalar);
impl_property_element!([Scalar; 2], Vec2);
impl_property_element!([Scalar; 3], Vec3);
impl_property_element!([Scalar; 4], Color);

/// Names a registered property.
///
/// A handle is a lookup key, not a borrow: it stays valid across
/// mutations of the mesh and fails cleanly (`NotFound` or
/// `TypeMismatch`) if the property was removed or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyHandle {
    kind: ElementKind,
    name: String,
    value_type: PropertyType,
}

impl PropertyHandle {
    pub(crate) fn new(kind: ElementKind, name: impl Into<String>, value_type: PropertyType) -> Self {
        Self {
            kind,
            name: name.into(),
            value_type,
        }
    }

    /// Element kind the property is attached to.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value type at the time the handle was issued.
    pub fn value_type(&self) -> PropertyType {
        self.value_type
    }
}
