// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Definition artifact: choice tables, planned stubs and handler bodies.
//!
//! Each handler runs, in order:
//!
//! 1. storage for the indices and every parameter;
//! 2. index extraction, every slot checked against its own range;
//! 3. (event form) parameter parsing with bounds and choice tables;
//! 4. the hook, whose `Err` is propagated;
//! 5. (query form) response formatting of every parameter.
//!
//! ```rust,ignore
//! fn handler_source_pwm_phasen_duty<H: CommandHooks + ?Sized>(
//!     context: &mut dyn ::scpi_gen_core::Context,
//!     hooks: &mut H,
//! ) -> ::scpi_gen_core::ScpiResult {
//!     let indices: [u32; 1];
//!     let duty: f32;
//!     indices = ::scpi_gen_core::parse_indices(
//!         context,
//!         &[::scpi_gen_core::IndexRange::new(1, 3)],
//!     )?;
//!     duty = ::scpi_gen_core::parse_f32(
//!         context,
//!         ::scpi_gen_core::Bounds::new(Some(0.0), Some(1.0)),
//!     )?;
//!     hooks.source_pwm_phasen_duty(indices, duty)?;
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;

use super::tokens::{
    core_path, float_literal, hook_input_names, hook_inputs, ident, indices_type, int_literal,
    optional, param_type, uint_literal
};
use crate::{
    ident as names,
    model::{CommandModel, EnumRef, HandlerForm, HandlerSpec, ParamType, ResolvedCommand}
};

/// Build the definition artifact.
pub fn generate(model: &CommandModel) -> TokenStream {
    let tables = choice_tables(model);
    let stubs = model
        .handlers()
        .filter_map(|(command, handler)| planned_stub(command, handler));
    let handlers = model
        .handlers()
        .map(|(command, handler)| handler_fn(command, handler));
    let dispatch = dispatch_impl(model);

    quote! {
        #(#tables)*
        #(#stubs)*
        #(#handlers)*
        #dispatch
    }
}

/// One table per choice table name, at its first occurrence.
fn choice_tables(model: &CommandModel) -> Vec<TokenStream> {
    let core = core_path();
    let mut emitted = HashSet::new();

    model
        .enum_params()
        .filter(|(_, reference)| emitted.insert(reference.choice_table.as_str()))
        .map(|(command, reference)| {
            let table = ident(&reference.choice_table);
            let ty = ident(&reference.type_name);
            let doc = format!(
                " Choice table of `{}`, first used by `{}`.",
                reference.local, command.pattern
            );
            let entries = reference.values.iter().filter_map(|mnemonic| {
                names::variant_name(mnemonic).map(|variant| {
                    let variant = ident(&variant);
                    quote! { #core::Choice::new(#mnemonic, #ty::#variant as i32) }
                })
            });
            quote! {
                #[doc = #doc]
                static #table: #core::ChoiceTable = #core::ChoiceTable::new(&[
                    #(#entries),*
                ]);
            }
        })
        .collect()
}

fn planned_stub(command: &ResolvedCommand, handler: &HandlerSpec) -> Option<TokenStream> {
    let core = core_path();
    let stub = ident(handler.planned_stub.as_deref()?);
    let inputs = hook_inputs(command, handler.form);
    let names = hook_input_names(command);
    let discard = match names.as_slice() {
        [] => None,
        [name] => Some(quote! { let _ = #name; }),
        names => Some(quote! { let _ = (#(#names),*); })
    };

    Some(quote! {
        fn #stub(#(#inputs),*) -> #core::HookResult {
            #discard
            ::core::result::Result::Err(#core::ErrorCode::EXECUTION_ERROR)
        }
    })
}

fn handler_fn(command: &ResolvedCommand, handler: &HandlerSpec) -> TokenStream {
    let core = core_path();
    let function = ident(&handler.function);
    let hook = ident(&handler.hook);

    let mut storage = Vec::new();
    if let Some(ty) = indices_type(command) {
        storage.push(quote! { let indices: #ty; });
    }
    for param in &command.params {
        let binding = ident(&param.binding);
        let ty = param_type(&param.ty);
        storage.push(match handler.form {
            HandlerForm::Event => quote! { let #binding: #ty; },
            HandlerForm::Query => {
                quote! { let mut #binding: #ty = ::core::default::Default::default(); }
            }
        });
    }

    let extract = (!command.indices.is_empty()).then(|| {
        let ranges = command.indices.iter().map(|index| {
            let min = uint_literal(index.min);
            let max = uint_literal(index.max);
            quote! { #core::IndexRange::new(#min, #max) }
        });
        quote! { indices = #core::parse_indices(context, &[#(#ranges),*])?; }
    });

    let parse: Vec<_> = match handler.form {
        HandlerForm::Event => command
            .params
            .iter()
            .map(|param| {
                let binding = ident(&param.binding);
                let value = parse_expr(&param.ty);
                quote! { #binding = #value?; }
            })
            .collect(),
        HandlerForm::Query => Vec::new()
    };

    let mut args = Vec::new();
    if !command.indices.is_empty() {
        args.push(quote! { indices });
    }
    for param in &command.params {
        let binding = ident(&param.binding);
        args.push(match handler.form {
            HandlerForm::Event => quote! { #binding },
            HandlerForm::Query => quote! { &mut #binding }
        });
    }

    let respond: Vec<_> = match handler.form {
        HandlerForm::Event => Vec::new(),
        HandlerForm::Query => command
            .params
            .iter()
            .map(|param| respond_stmt(&ident(&param.binding), &param.ty))
            .collect()
    };

    let context = if command.indices.is_empty() && command.params.is_empty() {
        ident("_context")
    } else {
        ident("context")
    };

    quote! {
        #[allow(clippy::needless_late_init)]
        fn #function<H: CommandHooks + ?Sized>(
            #context: &mut dyn #core::Context,
            hooks: &mut H
        ) -> #core::ScpiResult {
            #(#storage)*
            #extract
            #(#parse)*
            hooks.#hook(#(#args),*)?;
            #(#respond)*
            ::core::result::Result::Ok(())
        }
    }
}

fn parse_expr(ty: &ParamType) -> TokenStream {
    let core = core_path();
    match ty {
        ParamType::Int(bounds) => {
            let min = optional(bounds.min, int_literal);
            let max = optional(bounds.max, int_literal);
            quote! { #core::parse_i32(context, #core::Bounds::new(#min, #max)) }
        }
        ParamType::Uint(bounds) => {
            let min = optional(bounds.min, uint_literal);
            let max = optional(bounds.max, uint_literal);
            quote! { #core::parse_u32(context, #core::Bounds::new(#min, #max)) }
        }
        ParamType::Float(bounds) => {
            let min = optional(bounds.min, float_literal);
            let max = optional(bounds.max, float_literal);
            quote! { #core::parse_f32(context, #core::Bounds::new(#min, #max)) }
        }
        ParamType::Bool => quote! { #core::parse_bool(context) },
        ParamType::Text => quote! { #core::parse_text(context) },
        ParamType::Enum(EnumRef {
            choice_table, ..
        }) => {
            let table = ident(choice_table);
            quote! { #core::parse_choice(context, &#table) }
        }
    }
}

fn respond_stmt(binding: &proc_macro2::Ident, ty: &ParamType) -> TokenStream {
    let core = core_path();
    match ty {
        ParamType::Int(_) => quote! { context.result_i32(#binding); },
        ParamType::Uint(_) => quote! { context.result_u32(#binding); },
        ParamType::Float(_) => quote! { context.result_f32(#binding); },
        ParamType::Bool => quote! { context.result_bool(#binding); },
        ParamType::Text => quote! { context.result_text(&#binding); },
        ParamType::Enum(EnumRef {
            choice_table, ..
        }) => {
            let table = ident(choice_table);
            quote! { #core::write_choice(context, &#table, #binding); }
        }
    }
}

fn dispatch_impl(model: &CommandModel) -> TokenStream {
    let core = core_path();
    let arms = model.handlers().map(|(_, handler)| {
        let variant = ident(&handler.variant);
        let function = ident(&handler.function);
        quote! { Self::#variant => #function(context, hooks) }
    });

    quote! {
        impl<H: CommandHooks + ?Sized> #core::Dispatch<H> for Handler {
            fn invoke(
                self,
                context: &mut dyn #core::Context,
                hooks: &mut H
            ) -> #core::ScpiResult {
                match self {
                    #(#arms,)*
                }
            }
        }
    }
}
