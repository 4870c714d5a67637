// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token helpers shared by the declaration and definition emitters.

use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::model::{HandlerForm, ParamType, ResolvedCommand};

/// Path of the runtime support crate in generated code.
pub fn core_path() -> TokenStream {
    quote! { ::scpi_gen_core }
}

/// Identifier token, raw when `name` is a keyword.
pub fn ident(name: &str) -> Ident {
    let is_plain = syn::parse_str::<Ident>(name).is_ok();
    if is_plain || matches!(name, "self" | "Self" | "super" | "crate" | "_") {
        Ident::new(name, Span::call_site())
    } else {
        Ident::new_raw(name, Span::call_site())
    }
}

/// Rust type of a parameter.
pub fn param_type(ty: &ParamType) -> TokenStream {
    match ty {
        ParamType::Int(_) => quote! { i32 },
        ParamType::Uint(_) => quote! { u32 },
        ParamType::Float(_) => quote! { f32 },
        ParamType::Bool => quote! { bool },
        ParamType::Text => quote! { ::std::string::String },
        ParamType::Enum(reference) => {
            let name = ident(&reference.type_name);
            quote! { #name }
        }
    }
}

/// `[u32; N]` for a command with `N > 0` indices.
pub fn indices_type(command: &ResolvedCommand) -> Option<TokenStream> {
    (!command.indices.is_empty()).then(|| {
        let count = Literal::usize_unsuffixed(command.indices.len());
        quote! { [u32; #count] }
    })
}

/// Typed inputs of a hook: indices first, then every parameter by value
/// (event) or by output reference (query).
pub fn hook_inputs(command: &ResolvedCommand, form: HandlerForm) -> Vec<TokenStream> {
    let indices = indices_type(command).map(|ty| quote! { indices: #ty });
    let params = command.params.iter().map(|param| {
        let binding = ident(&param.binding);
        let ty = param_type(&param.ty);
        match form {
            HandlerForm::Event => quote! { #binding: #ty },
            HandlerForm::Query => quote! { #binding: &mut #ty }
        }
    });
    indices.into_iter().chain(params).collect()
}

/// Bare names of the hook inputs, in order.
pub fn hook_input_names(command: &ResolvedCommand) -> Vec<Ident> {
    let indices = (!command.indices.is_empty()).then(|| ident("indices"));
    let params = command.params.iter().map(|param| ident(&param.binding));
    indices.into_iter().chain(params).collect()
}

/// Signed integer literal.
pub fn int_literal(value: i32) -> TokenStream {
    let magnitude = Literal::u32_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

/// Unsigned integer literal.
pub fn uint_literal(value: u32) -> TokenStream {
    let literal = Literal::u32_unsuffixed(value);
    quote! { #literal }
}

/// Floating point literal of a finite value.
pub fn float_literal(value: f32) -> TokenStream {
    let magnitude = Literal::f32_unsuffixed(value.abs());
    if value.is_sign_negative() && value != 0.0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

/// `Some(literal)` or `None`.
pub fn optional<T: Copy>(value: Option<T>, literal: fn(T) -> TokenStream) -> TokenStream {
    match value {
        Some(value) => {
            let literal = literal(value);
            quote! { ::core::option::Option::Some(#literal) }
        }
        None => quote! { ::core::option::Option::None }
    }
}
