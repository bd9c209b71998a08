use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput};

/// Derive the `Component` trait, using the type's identifier as its kind name.
///
/// The generated impl sets `Component::NAME` to the type's own identifier
/// (`"Position"` for `struct Position`). That name is the discriminant used
/// by component catalogs and by the save format, so renaming a component
/// type changes how it appears in saved documents.
///
/// Works for structs and enums:
///
/// ```ignore
/// use firethorn_ecs::Component;
///
/// #[derive(Clone, Default, Component)]
/// struct Position {
///     x: f32,
///     y: f32,
/// }
///
/// assert_eq!(Position::NAME, "Position");
/// ```
#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if let Data::Union(_) = &input.data {
        return syn::Error::new_spanned(
            &input.ident,
            "Component can only be derived for structs and enums",
        )
        .to_compile_error()
        .into();
    }

    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics firethorn_ecs::Component for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;
        }
    };

    expanded.into()
}
