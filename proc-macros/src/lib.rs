use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, LitStr, Result};

/// Derive `Structure`, `From<Self> for Record` and `TryFrom<&Record> for
/// Self` for a struct with named fields.
///
/// Each field becomes a member tagged with the field's name, in declaration
/// order. `#[structure(tag = "...")]` overrides the tag.
#[proc_macro_derive(Structure, attributes(structure))]
pub fn derive_structure(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn derive(input: DeriveInput) -> Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "Structure can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            data.fields.span(),
            "Structure requires named fields",
        ));
    };

    let mut idents = Vec::new();
    let mut tags = Vec::new();
    for field in &fields.named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new(field.span(), "Structure requires named fields"));
        };
        tags.push(field_tag(field, &ident)?);
        idents.push(ident);
    }

    Ok(quote! {
        impl #impl_generics ::structural_records::Structure for #name #ty_generics #where_clause {
            const TAGS: &'static [::structural_records::Tag] = &[
                #( ::structural_records::Tag::from_static(#tags), )*
            ];
        }

        impl #impl_generics ::core::convert::From<#name #ty_generics>
            for ::structural_records::Record #where_clause
        {
            fn from(value: #name #ty_generics) -> Self {
                ::structural_records::create([
                    #( ::structural_records::Member::new(#tags, value.#idents), )*
                ])
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&::structural_records::Record>
            for #name #ty_generics #where_clause
        {
            type Error = ::structural_records::RecordError;

            fn try_from(
                record: &::structural_records::Record,
            ) -> ::core::result::Result<Self, Self::Error> {
                <Self as ::structural_records::Structure>::validate(record)?;
                ::core::result::Result::Ok(Self {
                    #( #idents: ::structural_records::read(#tags, record)?, )*
                })
            }
        }
    })
}

/// The tag of `field`: its `#[structure(tag = "...")]` if present, otherwise
/// its name.
fn field_tag(field: &syn::Field, ident: &syn::Ident) -> Result<LitStr> {
    let mut tag = None;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("structure")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                tag = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported structure attribute"))
            }
        })?;
    }
    Ok(tag.unwrap_or_else(|| {
        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);
        LitStr::new(name, ident.span())
    }))
}
