//! `#[stack_trace_debug]` for snafu error enums.
//!
//! Generates a `Debug` impl that prints the variant message, the captured
//! `location` when the variant has one, and the `source()` chain.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Fields;
use syn::ItemEnum;
use syn::Variant;
use syn::parse_macro_input;

#[proc_macro_attribute]
pub fn stack_trace_debug(_args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemEnum);
    expand(&item).into()
}

fn expand(item: &ItemEnum) -> TokenStream2 {
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let arms = item.variants.iter().map(debug_arm);

    quote! {
        #item

        impl #impl_generics ::std::fmt::Debug for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#arms)*
                }
                let mut source = ::std::error::Error::source(self);
                let mut depth = 0;
                while let Some(err) = source {
                    write!(f, "\n  {}: {}", depth, err)?;
                    source = err.source();
                    depth += 1;
                }
                Ok(())
            }
        }
    }
}

fn debug_arm(variant: &Variant) -> TokenStream2 {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(named) => {
            let has_location = named
                .named
                .iter()
                .any(|field| field.ident.as_ref().is_some_and(|i| i == "location"));
            if has_location {
                quote! {
                    Self::#ident { location, .. } => write!(f, "{}, at {}", self, location)?,
                }
            } else {
                quote! { Self::#ident { .. } => write!(f, "{}", self)?, }
            }
        }
        Fields::Unnamed(_) => quote! { Self::#ident(..) => write!(f, "{}", self)?, },
        Fields::Unit => quote! { Self::#ident => write!(f, "{}", self)?, },
    }
}
