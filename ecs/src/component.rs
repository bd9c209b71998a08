//! Component trait and type-erased component values.
//!
//! Components can be any `Send + Sync + 'static` type. [`Component::NAME`]
//! is the stable identifier a [`ComponentCatalog`](crate::ComponentCatalog)
//! keys kinds by, and the discriminant written next to each component
//! payload in saved documents.
//!
//! Use `#[derive(Component)]` from `firethorn-ecs-macro` to auto-implement
//! the trait.

use std::any::Any;

/// Trait for components stored in a [`Context`](crate::Context).
///
/// # Deriving
///
/// ```ignore
/// #[derive(Component, Default, Clone)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
/// ```
///
/// # Manual implementation
///
/// ```ignore
/// impl Component for CustomType {
///     const NAME: &'static str = "CustomType";
/// }
/// ```
pub trait Component: Send + Sync + 'static {
    /// The type name as a static string (e.g. `"Position"`).
    ///
    /// Used to key catalog entries and as the `kind` discriminant in
    /// saved documents, without requiring an instance.
    const NAME: &'static str;

    /// Returns the type name (e.g. `"Position"`).
    fn component_name(&self) -> &'static str {
        Self::NAME
    }
}

/// A type-erased component value.
///
/// Each boxed value holds a single component of a concrete type. The
/// trait provides kind lookup, cloning, and downcasting without exposing
/// the concrete type; decoded payloads and archetype representatives
/// travel through the crate in this shape.
pub trait AnyComponent: Send + Sync {
    /// The kind name of the underlying component ([`Component::NAME`]).
    fn component_name(&self) -> &'static str;

    /// Clone this value into a new heap allocation.
    fn clone_box(&self) -> BoxedComponent;

    /// Borrow the value for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Consume the box for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Component + Clone> AnyComponent for T {
    fn component_name(&self) -> &'static str {
        T::NAME
    }

    fn clone_box(&self) -> BoxedComponent {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Boxed [`AnyComponent`]; how component instances move through
/// type-erased paths.
pub type BoxedComponent = Box<dyn AnyComponent>;

impl Clone for BoxedComponent {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
