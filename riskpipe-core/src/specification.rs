//! Gating predicates evaluated against a [`Pipe`]
//!
//! A [`Specification`] is a boolean business rule over the current pipe
//! contents. Leaf rules read pipe slots; [`And`], [`Or`], [`Not`],
//! [`AllOf`] and [`AnyOf`] compose other specifications and short-circuit
//! left to right.
//!
//! A `false` result is a normal gating outcome. Errors are reserved for
//! wiring defects such as reading a slot no stage has set; a child that is
//! never evaluated because of short-circuiting cannot raise one.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::pipe::{ExposureAsset, MeanFunction, MeanIml};
use crate::{Pipe, Result};

/// A composable boolean rule over a [`Pipe`]
pub trait Specification {
    /// Evaluate the rule; must not mutate the pipe or perform I/O
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool>;

    /// Satisfied when both `self` and `other` are
    fn and<S: Specification>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Satisfied when either `self` or `other` is
    fn or<S: Specification>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Satisfied when `self` is not
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<S: Specification + ?Sized> Specification for &S {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        (**self).is_satisfied_by(pipe)
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        (**self).is_satisfied_by(pipe)
    }
}

/// Conjunction of two specifications
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(pub A, pub B);

impl<A: Specification, B: Specification> Specification for And<A, B> {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        Ok(self.0.is_satisfied_by(pipe)? && self.1.is_satisfied_by(pipe)?)
    }
}

/// Disjunction of two specifications
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(pub A, pub B);

impl<A: Specification, B: Specification> Specification for Or<A, B> {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        Ok(self.0.is_satisfied_by(pipe)? || self.1.is_satisfied_by(pipe)?)
    }
}

/// Negation of a specification
#[derive(Debug, Clone, Copy)]
pub struct Not<A>(pub A);

impl<A: Specification> Specification for Not<A> {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        Ok(!self.0.is_satisfied_by(pipe)?)
    }
}

/// Boxed specification usable across threads
pub type BoxedSpecification = Box<dyn Specification + Send + Sync>;

/// Satisfied when every child is (vacuously true when empty)
#[derive(Default)]
pub struct AllOf {
    children: Vec<BoxedSpecification>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<S: Specification + Send + Sync + 'static>(mut self, spec: S) -> Self {
        self.children.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Specification for AllOf {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        for child in &self.children {
            if !child.is_satisfied_by(pipe)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Satisfied when any child is (false when empty)
#[derive(Default)]
pub struct AnyOf {
    children: Vec<BoxedSpecification>,
}

impl AnyOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<S: Specification + Send + Sync + 'static>(mut self, spec: S) -> Self {
        self.children.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Specification for AnyOf {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        for child in &self.children {
            if child.is_satisfied_by(pipe)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Checks that the loaded mean IML lies inside the domain of the loaded
/// mean vulnerability function
#[derive(Debug, Clone, Copy, Default)]
pub struct IsHazardImlInRange;

impl Specification for IsHazardImlInRange {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        let iml = *pipe.get::<MeanIml>()?;
        let function = pipe.get::<MeanFunction>()?;

        Ok(!function.out_of_bounds(iml))
    }
}

/// Checks that the asset loaded for the site carries real exposure data
#[derive(Debug, Clone, Copy, Default)]
pub struct IsAssetComputable;

impl Specification for IsAssetComputable {
    fn is_satisfied_by(&self, pipe: &Pipe) -> Result<bool> {
        Ok(pipe.get::<ExposureAsset>()?.is_computable())
    }
}
