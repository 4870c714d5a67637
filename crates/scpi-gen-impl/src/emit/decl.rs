// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration artifact.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! #[repr(i32)]
//! pub enum SourcePwmModeMode {
//!     #[default]
//!     Off = 0,
//!     Oneph = 1,
//! }
//!
//! impl ::scpi_gen_core::ChoiceEnum for SourcePwmModeMode { /* ... */ }
//!
//! pub trait CommandHooks {
//!     fn source_pwm_mode(&mut self, mode: SourcePwmModeMode) -> ::scpi_gen_core::HookResult;
//!     fn source_pwm_mode_query(&mut self, mode: &mut SourcePwmModeMode)
//!         -> ::scpi_gen_core::HookResult;
//! }
//!
//! pub enum Handler { SourcePwmMode, SourcePwmModeQuery }
//!
//! pub static COMMANDS: &[::scpi_gen_core::CommandEntry<Handler>] = &[
//!     ::scpi_gen_core::CommandEntry::new(":SOURce:PWM:MODE", Handler::SourcePwmMode),
//!     ::scpi_gen_core::CommandEntry::new(":SOURce:PWM:MODE?", Handler::SourcePwmModeQuery),
//! ];
//! ```

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::tokens::{core_path, hook_input_names, hook_inputs, ident};
use crate::{
    canonical::{CanonicalEnums, EnumGroup},
    ident as names,
    model::{CommandModel, HandlerForm}
};

/// Build the declaration artifact.
pub fn generate(model: &CommandModel, enums: &CanonicalEnums) -> TokenStream {
    let types = enums.groups().iter().map(enum_type);
    let hooks = hooks_trait(model);
    let handler = handler_enum(model);
    let table = command_table(model);

    quote! {
        #(#types)*
        #hooks
        #handler
        #table
    }
}

fn enum_type(group: &EnumGroup) -> TokenStream {
    let core = core_path();
    let name = ident(&names::pascal(&group.name));
    let doc = format!(
        " Values of parameter `{}` of `{}`.",
        group.param, group.command
    );

    let variants: Vec<_> = (0_i32..)
        .zip(&group.values)
        .filter_map(|(ordinal, mnemonic)| {
            names::variant_name(mnemonic).map(|variant| (ordinal, mnemonic, ident(&variant)))
        })
        .collect();

    let declarations = variants.iter().map(|(ordinal, mnemonic, variant)| {
        let discriminant = Literal::i32_unsuffixed(*ordinal);
        let doc = format!(" `{mnemonic}`");
        let default = (*ordinal == 0).then(|| quote! { #[default] });
        quote! {
            #[doc = #doc]
            #default
            #variant = #discriminant
        }
    });

    let arms = variants.iter().map(|(ordinal, _, variant)| {
        let ordinal = Literal::i32_unsuffixed(*ordinal);
        quote! { #ordinal => ::core::option::Option::Some(Self::#variant) }
    });
    let count = Literal::usize_unsuffixed(variants.len());

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(i32)]
        pub enum #name {
            #(#declarations),*
        }

        impl #core::ChoiceEnum for #name {
            const COUNT: usize = #count;

            fn from_ordinal(ordinal: i32) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#arms,)*
                    _ => ::core::option::Option::None
                }
            }

            fn ordinal(self) -> i32 {
                self as i32
            }
        }
    }
}

fn hooks_trait(model: &CommandModel) -> TokenStream {
    let core = core_path();

    let methods = model.handlers().map(|(command, handler)| {
        let hook = ident(&handler.hook);
        let inputs = hook_inputs(command, handler.form);
        let doc = match handler.form {
            HandlerForm::Event => format!(" `{}`", handler.wire_pattern),
            HandlerForm::Query => format!(" `{}`: fill every output.", handler.wire_pattern)
        };

        match &handler.planned_stub {
            Some(stub) => {
                let stub = ident(stub);
                let args = hook_input_names(command);
                quote! {
                    #[doc = #doc]
                    #[doc = ""]
                    #[doc = " Planned: the default reports an execution error."]
                    fn #hook(&mut self, #(#inputs),*) -> #core::HookResult {
                        #stub(#(#args),*)
                    }
                }
            }
            None => quote! {
                #[doc = #doc]
                fn #hook(&mut self, #(#inputs),*) -> #core::HookResult;
            }
        }
    });

    quote! {
        /// Command implementations called by the generated handlers.
        ///
        /// Returning `Err(code)` pushes `code` into the error queue.
        pub trait CommandHooks {
            #(#methods)*
        }
    }
}

fn handler_enum(model: &CommandModel) -> TokenStream {
    let variants = model.handlers().map(|(_, handler)| {
        let variant = ident(&handler.variant);
        let doc = format!(" `{}`", handler.wire_pattern);
        quote! {
            #[doc = #doc]
            #variant
        }
    });

    quote! {
        /// Generated dispatch handlers, one per command table entry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Handler {
            #(#variants),*
        }
    }
}

fn command_table(model: &CommandModel) -> TokenStream {
    let core = core_path();
    let entries = model.handlers().map(|(_, handler)| {
        let pattern = &handler.wire_pattern;
        let variant = ident(&handler.variant);
        quote! { #core::CommandEntry::new(#pattern, Handler::#variant) }
    });

    quote! {
        /// Command table: wire pattern to handler.
        pub static COMMANDS: &[#core::CommandEntry<Handler>] = &[
            #(#entries),*
        ];
    }
}
