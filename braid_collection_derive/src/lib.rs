use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Derive macro for intrusive list records.
///
/// The struct must have a field named `link` whose type is either
/// `SingleLink<Self>` or `DoubleLink<Self>`; the link type selects whether a
/// `SingleNode` or a `DoubleNode` implementation is generated. Any other
/// fields are the record's own payload and are left untouched.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::braid_collections };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let mut link_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for field in fields.named.iter() {
            if let Some(ident) = &field.ident {
                if ident == "link" {
                    link_field = Some(field.clone());
                    break;
                }
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let link_field = match link_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'link'")
                .to_compile_error()
                .into();
        }
    };
    let link_type = &link_field.ty;

    let type_ident = if let Type::Path(TypePath { path, .. }) = link_type {
        path.segments
            .last()
            .expect("Expected at least one segment in the type path")
            .ident
            .clone()
    } else {
        return syn::Error::new_spanned(link_type, "Field 'link' must be a link type")
            .to_compile_error()
            .into();
    };

    let is_double_linked = match type_ident.to_string().as_str() {
        "SingleLink" => false,
        "DoubleLink" => true,
        _ => {
            return syn::Error::new_spanned(
                type_ident,
                "Field 'link' must be one of 'SingleLink' or 'DoubleLink'",
            )
            .to_compile_error()
            .into();
        }
    };

    // The recovery walks back from the embedded field to the record's base
    // address. Wrapping arithmetic keeps the computation defined on any input;
    // dereferencing the result is sound only when `link` really is the `link`
    // field of a live record, which every unsafe caller already guarantees.
    let expanded = if is_double_linked {
        quote! {
            unsafe impl #impl_generics #intrusive_path::traits::DoubleNode for #struct_name #ty_generics #where_clause {
                #[inline]
                fn ring(&self) -> &#intrusive_path::double::DoubleLink<Self> {
                    &self.link
                }

                #[inline]
                fn ring_mut(&mut self) -> &mut #intrusive_path::double::DoubleLink<Self> {
                    &mut self.link
                }

                #[inline]
                fn from_ring(
                    link: ::core::ptr::NonNull<#intrusive_path::double::DoubleLink<Self>>,
                ) -> ::core::ptr::NonNull<Self> {
                    let entry = link
                        .as_ptr()
                        .cast::<u8>()
                        .wrapping_sub(::core::mem::offset_of!(Self, link))
                        .cast::<Self>();
                    // A field sits at or above its record's base address, so
                    // walking back cannot reach null from a non-null `link`.
                    unsafe { ::core::ptr::NonNull::new_unchecked(entry) }
                }
            }
        }
    } else {
        quote! {
            unsafe impl #impl_generics #intrusive_path::traits::SingleNode for #struct_name #ty_generics #where_clause {
                #[inline]
                fn link(&self) -> &#intrusive_path::single::SingleLink<Self> {
                    &self.link
                }

                #[inline]
                fn link_mut(&mut self) -> &mut #intrusive_path::single::SingleLink<Self> {
                    &mut self.link
                }

                #[inline]
                fn from_link(
                    link: ::core::ptr::NonNull<#intrusive_path::single::SingleLink<Self>>,
                ) -> ::core::ptr::NonNull<Self> {
                    let entry = link
                        .as_ptr()
                        .cast::<u8>()
                        .wrapping_sub(::core::mem::offset_of!(Self, link))
                        .cast::<Self>();
                    // A field sits at or above its record's base address, so
                    // walking back cannot reach null from a non-null `link`.
                    unsafe { ::core::ptr::NonNull::new_unchecked(entry) }
                }
            }
        }
    };

    TokenStream::from(expanded)
}
