//! Compact `Display` rendering shared by every shape.
//!
//! Shapes render as `{Name: value, Name: value}` using the service field
//! names. Absent fields are skipped entirely, lists render as `[a, b]` and
//! maps as `{k=v, k=v}`.

use std::collections::BTreeMap;
use std::fmt;

/// Builder for the `{Name: value, ...}` rendering, in the spirit of
/// [`fmt::Formatter::debug_struct`].
pub(crate) struct Fields<'a, 'b> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> Fields<'a, 'b> {
    pub(crate) fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        Self {
            fmt,
            result,
            has_fields: false,
        }
    }

    fn entry(&mut self, name: &str, value: &dyn fmt::Display) {
        if self.result.is_err() {
            return;
        }
        let sep = if self.has_fields { ", " } else { "" };
        self.has_fields = true;
        self.result = write!(self.fmt, "{sep}{name}: {value}");
    }

    /// Render `name: value` when `value` is present.
    pub(crate) fn field<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.entry(name, &value);
        }
        self
    }

    /// Render `name: [a, b]` when the list is present.
    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, value: Option<&[T]>) -> &mut Self {
        if let Some(items) = value {
            self.entry(name, &List(items));
        }
        self
    }

    /// Render `name: {k=v}` when the map is present.
    pub(crate) fn map(&mut self, name: &str, value: Option<&BTreeMap<String, String>>) -> &mut Self {
        if let Some(map) = value {
            self.entry(name, &Map(map));
        }
        self
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }
}

struct List<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

struct Map<'a>(&'a BTreeMap<String, String>);

impl fmt::Display for Map<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}
