//! Fieldset iteration
//!
//! Turns a form's declared [`FieldsetSpec`] into a three-level lazy
//! structure for templates: fieldsets yield lines, lines yield
//! [`LineField`]s carrying the field plus its layout and label widths.
//!
//! Widths come from the line's `layout`/`labels` entries first. Once a line's
//! explicit widths run out (or if it has none), fields get the defaults from
//! [`LayoutSettings`]: `default_field_column_size` for layout, and
//! `first_label_column_size` then `label_column_size` for labels.

use formaldehyde_config::LayoutSettings;
use tracing::{debug, trace};

use crate::error::{FormError, Result};
use crate::host::{FormHook, FormHost};
use crate::logging::Pretty;
use crate::spec::{FieldsetDecl, FieldsetSpec, WidthSpec};

/// Fieldset rendering for any [`FormHost`] whose metadata declares fieldsets.
pub trait FieldsetForm: FormHost {
    /// The declared spec, or [`FormError::MissingFieldsets`].
    fn fieldset_spec(&self) -> Result<&FieldsetSpec> {
        self.meta()
            .and_then(|meta| meta.fieldsets.as_ref())
            .ok_or_else(|| FormError::MissingFieldsets {
                form: self.form_name().to_string(),
            })
    }

    /// Fieldsets using the process-wide layout settings.
    fn fieldsets(&self) -> Result<Fieldsets<'_, Self>> {
        let settings = formaldehyde_config::current();
        self.fieldsets_with(&settings)
    }

    /// Fieldsets using explicit layout settings.
    ///
    /// Every field named by the declaration is checked against the form here, so
    /// iterating the result cannot fail.
    fn fieldsets_with(&self, settings: &LayoutSettings) -> Result<Fieldsets<'_, Self>> {
        settings.validate()?;
        let spec = self.fieldset_spec()?;
        spec.validate()?;
        spec.validate_widths(settings.grid_columns)?;

        let fields = self.fields();
        if let Some(missing) = spec.field_names().find(|name| !fields.contains_key(*name)) {
            return Err(FormError::FieldNotFound {
                name: missing.to_string(),
            });
        }

        debug!(
            form = self.form_name(),
            fieldsets = spec.len(),
            "bound fieldsets"
        );
        trace!("fieldset spec: {}", Pretty(spec));

        Ok(Fieldsets {
            form: self,
            settings: *settings,
            decls: spec.iter(),
        })
    }

    /// Names of form fields not placed in any fieldset, in form order.
    fn unassigned_fields(&self) -> Result<Vec<&str>> {
        let spec = self.fieldset_spec()?;
        let assigned: Vec<&str> = spec.field_names().collect();
        Ok(self
            .fields()
            .keys()
            .map(String::as_str)
            .filter(|name| !assigned.contains(name))
            .collect())
    }
}

impl<F: FormHost + ?Sized> FieldsetForm for F {}

/// Single-pass iterator over a form's fieldsets.
pub struct Fieldsets<'a, F: FormHost + ?Sized> {
    form: &'a F,
    settings: LayoutSettings,
    decls: std::slice::Iter<'a, FieldsetDecl>,
}

impl<'a, F: FormHost + ?Sized> Iterator for Fieldsets<'a, F> {
    type Item = Fieldset<'a, F>;

    fn next(&mut self) -> Option<Self::Item> {
        let decl = self.decls.next()?;
        Some(Fieldset {
            form: self.form,
            settings: self.settings,
            decl,
            next_line: 0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.decls.size_hint()
    }
}

impl<F: FormHost + ?Sized> ExactSizeIterator for Fieldsets<'_, F> {}

/// One fieldset: its legend, description and classes, iterating its lines.
pub struct Fieldset<'a, F: FormHost + ?Sized> {
    form: &'a F,
    settings: LayoutSettings,
    decl: &'a FieldsetDecl,
    next_line: usize,
}

impl<'a, F: FormHost + ?Sized> Fieldset<'a, F> {
    pub fn legend(&self) -> Option<&'a str> {
        self.decl.legend.as_deref()
    }

    pub fn description(&self) -> &'a str {
        &self.decl.options.description
    }

    pub fn classes(&self) -> &'a str {
        &self.decl.options.classes
    }

    /// Every field name in this fieldset, across all lines.
    pub fn field_names(&self) -> impl Iterator<Item = &'a str> {
        let decl: &'a FieldsetDecl = self.decl;
        decl.options
            .fields
            .iter()
            .flat_map(|line| line.names().iter().map(String::as_str))
    }
}

impl<'a, F: FormHost + ?Sized> Iterator for Fieldset<'a, F> {
    type Item = Line<'a, F>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_line;
        let options = &self.decl.options;
        let line = options.fields.get(index)?;
        self.next_line += 1;

        let layout = options.layout.as_ref().and_then(|widths| widths.get(index));
        let labels = options.labels.as_ref().and_then(|widths| widths.get(index));
        trace!(line = index, ?layout, ?labels, "resolving line widths");

        Some(Line {
            form: self.form,
            names: line.names().iter(),
            layout: Widths::new(layout, WidthKind::Layout, self.settings),
            labels: Widths::new(labels, WidthKind::Label, self.settings),
        })
    }
}

/// One row of fields, yielding each with its widths.
pub struct Line<'a, F: FormHost + ?Sized> {
    form: &'a F,
    names: std::slice::Iter<'a, String>,
    layout: Widths<'a>,
    labels: Widths<'a>,
}

impl<'a, F: FormHost + ?Sized> Iterator for Line<'a, F> {
    type Item = LineField<'a, F::Field>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        // names were checked against the form when the fieldsets were bound
        let field = self.form.fields().get(name.as_str())?;
        Some(LineField {
            field,
            layout: self.layout.next()?,
            label: self.labels.next()?,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

/// A field placed on a line, with its column widths.
#[derive(Debug)]
pub struct LineField<'a, T> {
    pub field: &'a T,
    pub layout: u32,
    pub label: u32,
}

impl<'a, T> LineField<'a, T> {
    /// `(field, layout, label)`
    pub fn into_tuple(self) -> (&'a T, u32, u32) {
        (self.field, self.layout, self.label)
    }
}

#[derive(Debug, Clone, Copy)]
enum WidthKind {
    Layout,
    Label,
}

/// Widths for one line: explicit values first, then defaults forever.
struct Widths<'a> {
    explicit: Option<&'a WidthSpec>,
    kind: WidthKind,
    settings: LayoutSettings,
    position: usize,
}

impl<'a> Widths<'a> {
    fn new(explicit: Option<&'a WidthSpec>, kind: WidthKind, settings: LayoutSettings) -> Self {
        Self {
            explicit,
            kind,
            settings,
            position: 0,
        }
    }

    fn fallback(&self, position: usize) -> u32 {
        match self.kind {
            WidthKind::Layout => self.settings.default_field_column_size,
            WidthKind::Label => self.settings.default_label_size(position),
        }
    }
}

impl Iterator for Widths<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let position = self.position;
        self.position += 1;
        Some(
            self.explicit
                .and_then(|spec| spec.width_at(position))
                .unwrap_or_else(|| self.fallback(position)),
        )
    }
}

/// Checks at construction that the form declares usable fieldsets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldsetHook;

impl<F: FormHost + ?Sized> FormHook<F> for FieldsetHook {
    fn name(&self) -> &'static str {
        "fieldsets"
    }

    fn on_init(&self, form: &F) -> Result<()> {
        form.fieldsets().map(|_| ())
    }
}
