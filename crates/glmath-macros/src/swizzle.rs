//! Swizzle implementation macro.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Ident, Token, bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Longest selection a swizzle can make.
const MAX_SELECTION: usize = 4;

/// Parses macro input like `Vec2, [T, Vec2, Vec3, Vec4], [x, y], [r, g]` and
/// produces swizzle methods `r`, `g`, `rr`, `rg`, `gr`, `gg`, `rrr` and so on
/// up to four components. `r` and `g` read `x` and `y`.
pub(crate) struct Swizzling {
    ty: Ident,
    outputs: Vec<Ident>,
    fields: Vec<Ident>,
    names: Vec<Ident>,
}

fn parse_ident_list(input: ParseStream) -> syn::Result<Vec<Ident>> {
    let content;
    bracketed!(content in input);
    let idents: Punctuated<Ident, Token![,]> =
        content.parse_terminated(Ident::parse, Token![,])?;
    Ok(idents.into_iter().collect())
}

impl Parse for Swizzling {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Ident = input.parse()?;
        input.parse::<Token![,]>()?;

        let outputs_span = input.span();
        let outputs = parse_ident_list(input)?;
        input.parse::<Token![,]>()?;

        let fields_span = input.span();
        let fields = parse_ident_list(input)?;
        input.parse::<Token![,]>()?;

        let names_span = input.span();
        let names = parse_ident_list(input)?;
        let _trailing: Option<Token![,]> = input.parse()?;

        if outputs.len() != MAX_SELECTION {
            return Err(syn::Error::new(
                outputs_span,
                "expected the component type followed by the 2, 3 and 4 component vector types",
            ));
        }
        if !(2..=MAX_SELECTION).contains(&fields.len()) {
            return Err(syn::Error::new(
                fields_span,
                "a vector has between 2 and 4 fields",
            ));
        }
        if names.len() != fields.len() {
            return Err(syn::Error::new(
                names_span,
                format!("expected {} names, one per field", fields.len()),
            ));
        }

        Ok(Swizzling {
            ty,
            outputs,
            fields,
            names,
        })
    }
}

impl Swizzling {
    /// Every selection of one to four field indices, shortest first.
    fn selections(&self) -> Vec<Vec<usize>> {
        let width = self.fields.len();
        let mut all = Vec::new();
        let mut current: Vec<Vec<usize>> = vec![Vec::new()];
        for _ in 0..MAX_SELECTION {
            current = current
                .into_iter()
                .flat_map(|prefix| {
                    (0..width).map(move |index| {
                        let mut selection = prefix.clone();
                        selection.push(index);
                        selection
                    })
                })
                .collect();
            all.extend(current.iter().cloned());
        }
        all
    }

    fn expand(&self) -> proc_macro2::TokenStream {
        let ty = &self.ty;
        let component = &self.outputs[0];
        let methods = self.selections().into_iter().map(|selection| {
            let name = format_ident!(
                "{}",
                selection
                    .iter()
                    .map(|&index| self.names[index].to_string())
                    .collect::<String>()
            );
            let doc = format!(
                "Selects `{}`.",
                selection
                    .iter()
                    .map(|&index| self.fields[index].to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            let fields = selection.iter().map(|&index| &self.fields[index]);
            if selection.len() == 1 {
                quote! {
                    #[doc = #doc]
                    #[inline]
                    pub fn #name(&self) -> #component {
                        #(self.#fields)*
                    }
                }
            } else {
                let output = &self.outputs[selection.len() - 1];
                quote! {
                    #[doc = #doc]
                    #[inline]
                    pub fn #name(&self) -> #output<#component> {
                        #output::new(#(self.#fields),*)
                    }
                }
            }
        });

        quote! {
            impl<#component: Copy> #ty<#component> {
                #(#methods)*
            }
        }
    }
}

pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    let swizzling = syn::parse_macro_input!(token_stream as Swizzling);
    swizzling.expand().into()
}

#[cfg(test)]
mod test {
    use super::*;

    fn swizzling(tokens: proc_macro2::TokenStream) -> syn::Result<Swizzling> {
        syn::parse2(tokens)
    }

    #[test]
    fn sanity_selection_count() {
        let vec2 = swizzling(quote!(Vec2, [T, Vec2, Vec3, Vec4], [x, y], [r, g])).unwrap();
        assert_eq!(2 + 4 + 8 + 16, vec2.selections().len());

        let vec4 =
            swizzling(quote!(Vec4, [T, Vec2, Vec3, Vec4], [x, y, z, w], [s, t, p, q])).unwrap();
        assert_eq!(4 + 16 + 64 + 256, vec4.selections().len());
    }

    #[test]
    fn sanity_generated_methods() {
        let vec3 =
            swizzling(quote!(Vec3, [T, Vec2, Vec3, Vec4], [x, y, z], [r, g, b])).unwrap();
        let code = vec3.expand().to_string();
        assert!(code.contains("fn r ("));
        assert!(code.contains("fn bgr ("));
        assert!(code.contains("fn rrgb ("));
        assert!(!code.contains("fn a ("));
    }

    #[test]
    fn mismatched_names_are_rejected() {
        assert!(swizzling(quote!(Vec2, [T, Vec2, Vec3, Vec4], [x, y], [r])).is_err());
        assert!(swizzling(quote!(Vec2, [T, Vec2], [x, y], [r, g])).is_err());
    }
}
