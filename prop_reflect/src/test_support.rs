//! Fixture types shared by the unit tests.

use crate::{Reflect, reflect_methods};

/// Private fields, a `setC` setter and a bare `d(value)` method.
///
/// `calls` records which methods ran so tests can tell a method call from a
/// direct field write.
#[derive(Reflect, Debug, Default, Clone, PartialEq, Eq)]
#[reflect(methods, construct = "default")]
pub(crate) struct Sample {
    pub(crate) a: i32,
    pub(crate) b: i32,
    pub(crate) c: i32,
    pub(crate) d: i32,
    #[reflect(skip)]
    pub(crate) calls: Vec<&'static str>,
}

#[reflect_methods]
impl Sample {
    pub fn set_c(&mut self, value: i32) {
        self.calls.push("setC");
        self.c = value;
    }

    pub fn d(&mut self, value: i32) {
        self.calls.push("d");
        self.d = value;
    }
}

/// No members at all.
#[derive(Reflect, Debug, Default)]
#[reflect(construct = "default")]
pub(crate) struct Empty {}

/// A zero-argument method named `a` and nothing else called `a`.
#[derive(Reflect, Debug, Default)]
#[reflect(methods)]
pub(crate) struct NoArgs {
    pub(crate) hits: u32,
}

#[reflect_methods]
impl NoArgs {
    pub fn a(&self) -> i32 {
        7
    }
}

/// One property per extraction path.
///
/// * `total` has a getter returning ten times the field.
/// * `label` has a zero-argument method returning the upper-cased field.
/// * `shown` is a public field with no methods.
/// * `hidden` is private, and its getter needs `&mut self`.
#[derive(Reflect, Debug, Default)]
#[reflect(methods)]
pub(crate) struct Readings {
    pub(crate) total: i32,
    pub(crate) label: String,
    pub shown: i32,
    pub(crate) hidden: i32,
}

#[reflect_methods]
impl Readings {
    pub fn get_total(&self) -> i32 {
        self.total * 10
    }

    pub fn label(&self) -> String {
        self.label.to_uppercase()
    }

    pub fn get_hidden(&mut self) -> i32 {
        -1
    }
}
