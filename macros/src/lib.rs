//! Derive macros for the Reflux state engine
//!
//! This crate provides procedural macros to reduce boilerplate when defining
//! actions.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `reflux_core::Action` for an action enum
//!
//! # Example
//!
//! ```ignore
//! use reflux_core::Action as _;
//! use reflux_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     Add { text: String },
//!     Toggle { id: usize },
//!     #[action(rename = "filter")]
//!     SetFilter(Filter),
//! }
//!
//! assert_eq!(TodoAction::Toggle { id: 1 }.name(), "Toggle");
//! assert_eq!(TodoAction::SetFilter(Filter::All).name(), "filter");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for Action enums
///
/// Implements `reflux_core::action::Action`, whose `name()` returns the
/// variant name as a `&'static str`. Reducers never see the name; the store
/// uses it to label dispatch spans and log lines.
///
/// # Attributes
///
/// - `#[action(rename = "...")]` - Use a custom tag name for a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut name_arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let tag = match rename_of(&variant.attrs) {
            Ok(Some(rename)) => rename,
            Ok(None) => variant_name.to_string(),
            Err(err) => return err.to_compile_error().into(),
        };

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => quote! { Self::#variant_name },
        };

        name_arms.push(quote! { #pattern => #tag, });
    }

    // An enum with no variants has no values; matching on `*self` lets the
    // empty match type-check where `&Self` would not.
    let body = if name_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#name_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::reflux_core::action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(rename = "...")]` from a variant's attributes
fn rename_of(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `rename`"))
            }
        })?;
    }

    Ok(rename)
}
