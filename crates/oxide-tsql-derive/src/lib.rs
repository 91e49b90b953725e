//! Derive macros for the T-SQL syntax tree.
//!
//! This crate provides `#[derive(AstNode)]`, which implements the traversal
//! traits of `oxide_tsql::visit` for a syntax tree type.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Attribute, Data, DataEnum, DeriveInput, Fields, Ident};

/// Derives `Walk`, `Fold` and (when the shape allows it) `Spanned`.
///
/// # Attributes
///
/// - `#[ast(node = Category)]` - Reports the type to visitors as
///   `Node::Category(&self)` and routes rewrites through
///   `Rewriter::rewrite_category`. Without it, a struct carrying a `span`
///   field is reported as `Node::Fragment`, and enums are transparent.
///
/// # Generated Items
///
/// - `Walk` - visits every field in declaration order, which is the order
///   the fields appear in source.
/// - `Fold` - rebuilds the value from folded fields.
/// - `Spanned` - for structs with a `span: Span` field, and for enums whose
///   variants all wrap exactly one spanned value.
#[proc_macro_derive(AstNode, attributes(ast))]
pub fn derive_ast_node(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_ast_node_impl(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn derive_ast_node_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let category = get_node_category(&input.attrs)?;
    match &input.data {
        Data::Struct(data) => derive_struct(&input.ident, category.as_ref(), &data.fields),
        Data::Enum(data) => Ok(derive_enum(&input.ident, category.as_ref(), data)),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "AstNode derive does not support unions",
        )),
    }
}

fn derive_struct(
    name: &Ident,
    category: Option<&Ident>,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    let Fields::Named(named) = fields else {
        return Err(syn::Error::new_spanned(
            name,
            "AstNode derive only supports structs with named fields",
        ));
    };

    let field_names: Vec<&Ident> = named
        .named
        .iter()
        .filter_map(|f| f.ident.as_ref())
        .collect();
    let has_span = field_names.iter().any(|f| *f == "span");
    let children: Vec<&&Ident> = field_names.iter().filter(|f| **f != "span").collect();

    let node = match category {
        Some(category) => Some(quote! { ::oxide_tsql::visit::Node::#category(self) }),
        None if has_span => Some(quote! {
            ::oxide_tsql::visit::Node::Fragment {
                type_name: stringify!(#name),
                span: self.span,
            }
        }),
        None => None,
    };

    let walk_children = quote! {
        #( ::oxide_tsql::visit::Walk::walk(&self.#children, visitor); )*
    };
    let walk_body = wrap_walk(node.as_ref(), &walk_children);

    let folded = quote! {
        Self {
            #( #field_names: ::oxide_tsql::visit::Fold::fold(self.#field_names, rewriter), )*
        }
    };
    let fold_body = wrap_fold(category, &folded);

    let spanned = if has_span {
        quote! {
            impl ::oxide_tsql::visit::Spanned for #name {
                fn span(&self) -> ::oxide_tsql::lexer::Span {
                    self.span
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl<'ast> ::oxide_tsql::visit::Walk<'ast> for #name {
            #[allow(unused_variables)]
            fn walk<V: ::oxide_tsql::visit::Visitor<'ast> + ?Sized>(
                &'ast self,
                visitor: &mut V,
            ) {
                #walk_body
            }
        }

        impl ::oxide_tsql::visit::Fold for #name {
            fn fold<R: ::oxide_tsql::visit::Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
                #fold_body
            }
        }

        #spanned
    })
}

fn derive_enum(name: &Ident, category: Option<&Ident>, data: &DataEnum) -> TokenStream2 {
    let all_unit = data
        .variants
        .iter()
        .all(|v| matches!(v.fields, Fields::Unit));

    if all_unit {
        // Discriminator enums are leaves.
        return quote! {
            impl<'ast> ::oxide_tsql::visit::Walk<'ast> for #name {
                fn walk<V: ::oxide_tsql::visit::Visitor<'ast> + ?Sized>(
                    &'ast self,
                    _visitor: &mut V,
                ) {
                }
            }

            impl ::oxide_tsql::visit::Fold for #name {
                fn fold<R: ::oxide_tsql::visit::Rewriter + ?Sized>(
                    self,
                    _rewriter: &mut R,
                ) -> Self {
                    self
                }
            }
        };
    }

    let mut walk_arms = Vec::new();
    let mut fold_arms = Vec::new();
    let mut span_arms = Vec::new();
    let mut all_newtype = true;

    for variant in &data.variants {
        let ident = &variant.ident;
        match &variant.fields {
            Fields::Unit => {
                all_newtype = false;
                walk_arms.push(quote! { Self::#ident => {} });
                fold_arms.push(quote! { Self::#ident => Self::#ident });
            }
            Fields::Unnamed(unnamed) => {
                let bindings: Vec<Ident> = (0..unnamed.unnamed.len())
                    .map(|i| format_ident!("field{}", i))
                    .collect();
                if bindings.len() == 1 {
                    span_arms.push(quote! {
                        Self::#ident(inner) => ::oxide_tsql::visit::Spanned::span(inner)
                    });
                } else {
                    all_newtype = false;
                }
                walk_arms.push(quote! {
                    Self::#ident( #(#bindings),* ) => {
                        #( ::oxide_tsql::visit::Walk::walk(#bindings, visitor); )*
                    }
                });
                fold_arms.push(quote! {
                    Self::#ident( #(#bindings),* ) => Self::#ident(
                        #( ::oxide_tsql::visit::Fold::fold(#bindings, rewriter) ),*
                    )
                });
            }
            Fields::Named(named) => {
                all_newtype = false;
                let bindings: Vec<&Ident> =
                    named.named.iter().filter_map(|f| f.ident.as_ref()).collect();
                walk_arms.push(quote! {
                    Self::#ident { #(#bindings),* } => {
                        #( ::oxide_tsql::visit::Walk::walk(#bindings, visitor); )*
                    }
                });
                fold_arms.push(quote! {
                    Self::#ident { #(#bindings),* } => Self::#ident {
                        #( #bindings: ::oxide_tsql::visit::Fold::fold(#bindings, rewriter) ),*
                    }
                });
            }
        }
    }

    let node = category.map(|category| quote! { ::oxide_tsql::visit::Node::#category(self) });
    let walk_children = quote! {
        match self {
            #(#walk_arms),*
        }
    };
    let walk_body = wrap_walk(node.as_ref(), &walk_children);

    let folded = quote! {
        match self {
            #(#fold_arms),*
        }
    };
    let fold_body = wrap_fold(category, &folded);

    let spanned = if all_newtype {
        quote! {
            impl ::oxide_tsql::visit::Spanned for #name {
                fn span(&self) -> ::oxide_tsql::lexer::Span {
                    match self {
                        #(#span_arms),*
                    }
                }
            }
        }
    } else {
        quote! {}
    };

    quote! {
        impl<'ast> ::oxide_tsql::visit::Walk<'ast> for #name {
            #[allow(unused_variables)]
            fn walk<V: ::oxide_tsql::visit::Visitor<'ast> + ?Sized>(
                &'ast self,
                visitor: &mut V,
            ) {
                #walk_body
            }
        }

        impl ::oxide_tsql::visit::Fold for #name {
            #[allow(unused_variables)]
            fn fold<R: ::oxide_tsql::visit::Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
                #fold_body
            }
        }

        #spanned
    }
}

fn wrap_walk(node: Option<&TokenStream2>, children: &TokenStream2) -> TokenStream2 {
    match node {
        Some(node) => quote! {
            let node = #node;
            if visitor.pre_visit(node) == ::oxide_tsql::visit::VisitAction::Continue {
                #children
            }
            visitor.post_visit(node);
        },
        None => children.clone(),
    }
}

fn wrap_fold(category: Option<&Ident>, folded: &TokenStream2) -> TokenStream2 {
    match category {
        Some(category) => {
            let hook = format_ident!("rewrite_{}", to_snake_case(&category.to_string()));
            quote! {
                let folded = #folded;
                rewriter.#hook(folded)
            }
        }
        None => folded.clone(),
    }
}

fn get_node_category(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    let mut category = None;
    for attr in attrs {
        if attr.path().is_ident("ast") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("node") {
                    let value: Ident = meta.value()?.parse()?;
                    category = Some(value);
                    Ok(())
                } else {
                    Err(meta.error("unsupported ast attribute"))
                }
            })?;
        }
    }
    Ok(category)
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
