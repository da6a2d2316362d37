//! imdbx Derive: procedural macros for imdbx schema bindings.
//!
//! Provides `#[derive(TsvRecord)]`, which turns a plain struct into a snapshot file layout:
//! header contract, row decoder and key extraction.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, Type, parse_macro_input};

/// Derive macro for schema bindings.
///
/// # Example
///
/// ```ignore
/// #[derive(TsvRecord)]
/// #[tsv(file_name = "title.episode.tsv.gz")]
/// pub struct TitleEpisode {
///     #[tsv(column = "tconst", key)]
///     pub episode_id: String,
///     #[tsv(column = "parentTconst")]
///     pub parent_id: String,
///     pub season_number: Option<i32>,
///     pub episode_number: Option<i32>,
/// }
/// ```
///
/// Generates:
/// - `TsvRecord` implementation (`HEADER`, `FILE_NAME`, `from_fields`)
/// - `FlatRecord` when one field is marked `key`
/// - `NestedRecord` when fields are marked `key` and `ordering`
///
/// Field attributes:
/// - `column = "..."`: header name (default: lowerCamelCase of the field name)
/// - `separator = "..."`: list separator for list fields (default: `","`)
/// - `key`: primary key field
/// - `ordering`: secondary `i32` ordering field of a nested index
#[proc_macro_derive(TsvRecord, attributes(tsv))]
pub fn derive_tsv_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// One column of the file layout, in header order.
struct ColumnSpec {
    ident: Ident,
    ty: Type,
    column: String,
    separator: String,
    key: bool,
    ordering: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let file_name = extract_file_name(input)?
        .unwrap_or_else(|| format!("{}.tsv.gz", name.to_string().to_lowercase()));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "TsvRecord can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "TsvRecord can only be derived for structs",
            ));
        }
    };

    let columns = fields
        .iter()
        .map(parse_column)
        .collect::<syn::Result<Vec<_>>>()?;

    let key = single_marked(&columns, |c| c.key, "key")?;
    let ordering = single_marked(&columns, |c| c.ordering, "ordering")?;

    let header = columns.iter().map(|c| &c.column);
    let decoders = columns.iter().enumerate().map(|(idx, c)| {
        let ident = &c.ident;
        let ty = &c.ty;
        let column = &c.column;
        let separator = &c.separator;

        quote! {
            #ident: ::imdbx_core::record::decode_field::<#ty>(fields, #idx, #column, #separator)?
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let keyed = match (key, ordering) {
        (Some(key), Some(ordering)) => {
            if key.ident == ordering.ident {
                return Err(syn::Error::new_spanned(
                    &key.ident,
                    "a field cannot be both `key` and `ordering`",
                ));
            }
            let key_ident = &key.ident;
            let ordering_ident = &ordering.ident;
            quote! {
                impl #impl_generics ::imdbx_core::record::NestedRecord for #name #ty_generics #where_clause {
                    fn primary_key(&self) -> &str {
                        ::core::convert::AsRef::<str>::as_ref(&self.#key_ident)
                    }

                    fn ordering(&self) -> i32 {
                        self.#ordering_ident
                    }
                }
            }
        }
        (Some(key), None) => {
            let key_ident = &key.ident;
            quote! {
                impl #impl_generics ::imdbx_core::record::FlatRecord for #name #ty_generics #where_clause {
                    fn key(&self) -> &str {
                        ::core::convert::AsRef::<str>::as_ref(&self.#key_ident)
                    }
                }
            }
        }
        (None, Some(ordering)) => {
            return Err(syn::Error::new_spanned(
                &ordering.ident,
                "`ordering` requires another field marked `key`",
            ));
        }
        (None, None) => TokenStream2::new(),
    };

    Ok(quote! {
        impl #impl_generics ::imdbx_core::record::TsvRecord for #name #ty_generics #where_clause {
            const HEADER: &'static [&'static str] = &[#(#header),*];
            const FILE_NAME: &'static str = #file_name;

            fn from_fields(
                fields: &[&str],
            ) -> ::core::result::Result<Self, ::imdbx_core::record::FieldError> {
                ::core::result::Result::Ok(Self {
                    #(#decoders),*
                })
            }
        }

        #keyed
    })
}

fn parse_column(field: &Field) -> syn::Result<ColumnSpec> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    let column = lower_camel_case(&ident.unraw().to_string());

    let mut spec = ColumnSpec {
        ident,
        ty: field.ty.clone(),
        column,
        separator: ",".to_string(),
        key: false,
        ordering: false,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("tsv") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                let lit: LitStr = meta.value()?.parse()?;
                spec.column = lit.value();
                Ok(())
            } else if meta.path.is_ident("separator") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("separator must not be empty"));
                }
                spec.separator = lit.value();
                Ok(())
            } else if meta.path.is_ident("key") {
                spec.key = true;
                Ok(())
            } else if meta.path.is_ident("ordering") {
                spec.ordering = true;
                Ok(())
            } else {
                Err(meta.error("unsupported tsv field attribute"))
            }
        })?;
    }

    Ok(spec)
}

fn single_marked<'a>(
    columns: &'a [ColumnSpec],
    marked: impl Fn(&ColumnSpec) -> bool,
    what: &str,
) -> syn::Result<Option<&'a ColumnSpec>> {
    let mut found = columns.iter().filter(|c| marked(c));
    let first = found.next();
    if let Some(extra) = found.next() {
        return Err(syn::Error::new_spanned(
            &extra.ident,
            format!("only one field may be marked `{what}`"),
        ));
    }
    Ok(first)
}

fn extract_file_name(input: &DeriveInput) -> syn::Result<Option<String>> {
    let mut file_name = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("tsv") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("file_name") {
                let lit: LitStr = meta.value()?.parse()?;
                file_name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported tsv struct attribute"))
            }
        })?;
    }
    Ok(file_name)
}

/// `primary_name` → `primaryName`
fn lower_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
