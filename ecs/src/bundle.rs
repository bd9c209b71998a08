use crate::component::Component;
use crate::context::{Context, ContextError};
use crate::entity::Entity;

/// A group of components that can be attached together on an entity.
///
/// Implemented for tuples of components up to 8 elements.
///
/// # Example
///
/// ```ignore
/// let entity = context.create_entity_with((
///     Position { x: 0.0, y: 1.0 },
///     Velocity { x: 1.0, y: 0.0 },
///     Name::new("player"),
/// ))?;
/// ```
pub trait Bundle: Send + 'static {
    /// Attaches all components in this bundle onto `entity`.
    ///
    /// # Errors
    ///
    /// Returns an error if any component kind has not been registered.
    fn insert_into(self, context: &mut Context, entity: Entity) -> Result<(), ContextError>;
}

macro_rules! impl_bundle {
    ($($T:ident),+) => {
        impl<$($T: Component),+> Bundle for ($($T,)+) {
            fn insert_into(
                self,
                context: &mut Context,
                entity: Entity,
            ) -> Result<(), ContextError> {
                #[allow(non_snake_case)]
                let ($($T,)+) = self;
                $(context.attach(entity, $T)?;)+
                Ok(())
            }
        }
    };
}

impl_bundle!(A);
impl_bundle!(A, B);
impl_bundle!(A, B, C);
impl_bundle!(A, B, C, D);
impl_bundle!(A, B, C, D, E);
impl_bundle!(A, B, C, D, E, F);
impl_bundle!(A, B, C, D, E, F, G);
impl_bundle!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Position {
        x: f32,
        y: f32,
    }

    impl Component for Position {
        const NAME: &'static str = "Position";
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Velocity {
        x: f32,
    }

    impl Component for Velocity {
        const NAME: &'static str = "Velocity";
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Health(u32);

    impl Component for Health {
        const NAME: &'static str = "Health";
    }

    #[test]
    fn single_element_bundle() {
        let mut context = Context::new("test");
        context.register::<Health>();
        let entity = context.create_entity();

        (Health(100),).insert_into(&mut context, entity).unwrap();

        assert_eq!(context.get::<Health>(entity), Some(&Health(100)));
    }

    #[test]
    fn two_element_bundle() {
        let mut context = Context::new("test");
        context.register::<Position>();
        context.register::<Health>();
        let entity = context.create_entity();

        (Position { x: 1.0, y: 2.0 }, Health(50))
            .insert_into(&mut context, entity)
            .unwrap();

        assert_eq!(
            context.get::<Position>(entity),
            Some(&Position { x: 1.0, y: 2.0 })
        );
        assert_eq!(context.get::<Health>(entity), Some(&Health(50)));
    }

    #[test]
    fn three_element_bundle() {
        let mut context = Context::new("test");
        context.register::<Position>();
        context.register::<Velocity>();
        context.register::<Health>();
        let entity = context.create_entity();

        (Position { x: 0.0, y: 0.0 }, Velocity { x: 1.0 }, Health(75))
            .insert_into(&mut context, entity)
            .unwrap();

        assert_eq!(context.get::<Velocity>(entity), Some(&Velocity { x: 1.0 }));
        assert_eq!(context.get::<Health>(entity), Some(&Health(75)));
    }

    #[test]
    fn unregistered_component_returns_err() {
        let mut context = Context::new("test");
        context.register::<Position>();
        // Health is NOT registered
        let entity = context.create_entity();

        let result = (Position { x: 0.0, y: 0.0 }, Health(100)).insert_into(&mut context, entity);
        assert!(result.is_err());
    }
}
