use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Visibility};

/// Derives `fieldcheck::Reflect` for a struct with named fields.
///
/// Each field may carry at most one `#[validate("...")]` attribute holding
/// its raw annotation string; fields without one are skipped at validation
/// time. Only `pub` fields count as exported — an annotated non-public
/// field is reported as a violation instead of being checked, so its type
/// does not need to be capturable.
#[proc_macro_derive(Reflect, attributes(validate))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Reflect requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Reflect can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::new();
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_name = ident.to_string();
        let exported = matches!(field.vis, Visibility::Public(_));
        let annotation = annotation_for(field)?;

        let descriptor = match annotation {
            Some(tag) if exported => quote! {
                ::fieldcheck::Field {
                    name: #field_name,
                    exported: true,
                    annotation: #tag,
                    value: ::core::option::Option::Some(
                        ::fieldcheck::AsFieldValue::as_field_value(&self.#ident),
                    ),
                }
            },
            Some(tag) => quote! {
                ::fieldcheck::Field {
                    name: #field_name,
                    exported: false,
                    annotation: #tag,
                    value: ::core::option::Option::None,
                }
            },
            None => quote! {
                ::fieldcheck::Field {
                    name: #field_name,
                    exported: #exported,
                    annotation: "",
                    value: ::core::option::Option::None,
                }
            },
        };
        descriptors.push(descriptor);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::fieldcheck::Reflect for #name #ty_generics #where_clause {
            fn reflect(&self) -> ::fieldcheck::Shape<'_> {
                ::fieldcheck::Shape::Record(::std::vec![
                    #(#descriptors),*
                ])
            }
        }
    })
}

fn annotation_for(field: &syn::Field) -> Result<Option<String>, syn::Error> {
    let mut annotation = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }
        if annotation.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[validate] attribute",
            ));
        }
        let tag: LitStr = attr.parse_args()?;
        annotation = Some(tag.value());
    }
    Ok(annotation)
}
