//! Per-element-kind property registry.
//!
//! Each mesh owns one registry per [`ElementKind`]. The registry keeps
//! every attached property array exactly as long as the number of
//! elements of its kind: element insertion calls [`PropertyRegistry::push`],
//! bulk resizes call [`PropertyRegistry::resize`], and a newly added
//! property is allocated at the current length.

use surfmesh_types::{ElementKind, MeshError, MeshResult};

use crate::property::{PropertyArray, PropertyHandle, PropertyType, PropertyValue};

/// A registered property: name, fill value, and storage.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    default: PropertyValue,
    data: PropertyArray,
}

impl Property {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value used to fill new slots.
    pub fn default_value(&self) -> PropertyValue {
        self.default
    }

    pub fn value_type(&self) -> PropertyType {
        self.data.value_type()
    }

    pub fn data(&self) -> &PropertyArray {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut PropertyArray {
        &mut self.data
    }
}

/// The set of properties attached to one element kind.
///
/// Properties are kept in registration order, which is also the
/// order they are listed in stats reports.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    kind: ElementKind,
    len: usize,
    properties: Vec<Property>,
}

impl PropertyRegistry {
    /// Creates an empty registry for `kind` with zero elements.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            len: 0,
            properties: Vec::new(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Number of elements every array is sized to.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of registered properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Registers a new property filled with `default`.
    pub fn add(&mut self, name: &str, default: PropertyValue) -> MeshResult<PropertyHandle> {
        if self.contains(name) {
            return Err(MeshError::DuplicateName {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        self.properties.push(Property {
            name: name.to_string(),
            default,
            data: PropertyArray::filled(default, self.len),
        });
        Ok(PropertyHandle::new(self.kind, name, default.value_type()))
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> MeshResult<PropertyHandle> {
        let p = self.find(name)?;
        Ok(PropertyHandle::new(self.kind, name, p.value_type()))
    }

    /// Returns the existing property, or registers it with `default`.
    ///
    /// An existing property of a different type is a `TypeMismatch`.
    pub fn get_or_add(&mut self, name: &str, default: PropertyValue) -> MeshResult<PropertyHandle> {
        let wanted = default.value_type();
        match self.find(name).ok().map(Property::value_type) {
            Some(found) if found == wanted => Ok(PropertyHandle::new(self.kind, name, found)),
            Some(found) => Err(MeshError::TypeMismatch {
                name: name.to_string(),
                expected: wanted.to_string(),
                found: found.to_string(),
            }),
            None => self.add(name, default),
        }
    }

    /// Deregisters a property and frees its storage.
    pub fn remove(&mut self, name: &str) -> MeshResult<Property> {
        let idx = self.position(name).ok_or_else(|| self.not_found(name))?;
        Ok(self.properties.remove(idx))
    }

    /// The property named `name`.
    pub fn find(&self, name: &str) -> MeshResult<&Property> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| self.not_found(name))
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> MeshResult<&mut Property> {
        match self.position(name) {
            Some(idx) => Ok(&mut self.properties[idx]),
            None => Err(self.not_found(name)),
        }
    }

    /// Resolves a handle, checking that the property still has the
    /// type the handle was issued for.
    pub fn resolve(&self, handle: &PropertyHandle) -> MeshResult<&Property> {
        let p = self.find(handle.name())?;
        check_type(handle, p.value_type())?;
        Ok(p)
    }

    pub(crate) fn resolve_mut(&mut self, handle: &PropertyHandle) -> MeshResult<&mut Property> {
        let p = self.find_mut(handle.name())?;
        check_type(handle, p.value_type())?;
        Ok(p)
    }

    /// Appends one slot to every array, filled with each default.
    pub fn push(&mut self) {
        self.resize(self.len + 1);
    }

    /// Resizes every array to `len`, padding with each default.
    pub fn resize(&mut self, len: usize) {
        for p in &mut self.properties {
            p.data.resize(len, p.default);
        }
        self.len = len;
    }

    /// Reserves room for `additional` more elements in every array.
    pub fn reserve(&mut self, additional: usize) {
        for p in &mut self.properties {
            p.data.reserve(additional);
        }
    }

    /// Drops all elements, keeping the registrations.
    pub fn clear(&mut self) {
        self.resize(0);
    }

    /// Checks that every array has exactly `len` slots.
    pub fn validate(&self) -> MeshResult<()> {
        for p in &self.properties {
            if p.data.len() != self.len {
                return Err(MeshError::InvalidMesh(format!(
                    "{} property '{}' has {} slots, expected {}",
                    self.kind,
                    p.name,
                    p.data.len(),
                    self.len
                )));
            }
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    fn not_found(&self, name: &str) -> MeshError {
        MeshError::NotFound {
            kind: self.kind,
            name: name.to_string(),
        }
    }
}

fn check_type(handle: &PropertyHandle, found: PropertyType) -> MeshResult<()> {
    if handle.value_type() != found {
        return Err(MeshError::TypeMismatch {
            name: handle.name().to_string(),
            expected: handle.value_type().to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}
