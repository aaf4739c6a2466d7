//! Structured, template-agnostic method model.
//!
//! [`build_methods`] converts raw trait method nodes into [`Method`] values:
//! the pure data that every template consumes. Parameters and returns keep
//! declaration order (templates index returns positionally, so order is
//! load-bearing), unnamed arguments get synthetic positional names, and doc
//! comment lines are carried through with their original delimiters.

// External imports (alphabetized)
use serde::Serialize;
use syn::{FnArg, Meta, Pat, ReturnType, TraitItemFn, Type};

use crate::reflect::decode_type;

/// One parameter or return value: a name and its decoded type text
#[derive(Debug, Clone, Serialize)]
pub struct Arg {
    pub name: String,
    pub ty: String,
}

/// One trait method in template-ready form
#[derive(Debug, Clone, Serialize)]
pub struct Method {
    /// Method name as declared
    pub name: String,
    /// Doc comment lines preceding the method, in source order
    pub doc: Vec<String>,
    /// Receiver text (`&self`, `&mut self` or `self`)
    pub receiver: String,
    /// Whether the method is declared `async`
    pub is_async: bool,
    /// Parameters in declaration order, receiver excluded
    pub params: Vec<Arg>,
    /// Return values in declaration order; a tuple return contributes one
    /// entry per element
    pub returns: Vec<Arg>,
}

/// Build the method model from raw trait items, skipping any method whose
/// name appears in `ignored` (exact, case-sensitive match). Associated
/// functions without a receiver are skipped too: a pass-through decorator
/// has no delegate to forward them to.
pub fn build_methods(raw: &[TraitItemFn], ignored: &[String]) -> Vec<Method> {
    let mut methods = Vec::new();

    for item in raw {
        let name = item.sig.ident.to_string();
        if ignored.iter().any(|m| *m == name) {
            continue;
        }

        let mut receiver = None;
        let mut params = Vec::new();
        let mut counter = 0usize;
        for input in &item.sig.inputs {
            match input {
                FnArg::Receiver(r) => receiver = Some(receiver_text(r)),
                FnArg::Typed(pat_type) => {
                    let name = match &*pat_type.pat {
                        Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
                        // `_` and pattern parameters get positional names
                        _ => format!("p{}", counter),
                    };
                    params.push(Arg {
                        name,
                        ty: decode_type(&pat_type.ty),
                    });
                    counter += 1;
                }
            }
        }

        let Some(receiver) = receiver else {
            log::debug!("skipping associated function `{}`: no receiver", name);
            continue;
        };

        methods.push(Method {
            doc: doc_lines(item),
            receiver,
            is_async: item.sig.asyncness.is_some(),
            params,
            returns: return_args(&item.sig.output),
            name,
        });
    }

    methods
}

/// Decompose a return type into positional return arguments named `r<N>`.
/// Tuples contribute one entry per element; `()` and a missing return type
/// contribute none.
fn return_args(output: &ReturnType) -> Vec<Arg> {
    let ReturnType::Type(_, ty) = output else {
        return Vec::new();
    };

    match &**ty {
        Type::Tuple(tuple) => tuple
            .elems
            .iter()
            .enumerate()
            .map(|(i, elem)| Arg {
                name: format!("r{}", i),
                ty: decode_type(elem),
            })
            .collect(),
        other => vec![Arg {
            name: "r0".to_string(),
            ty: decode_type(other),
        }],
    }
}

fn receiver_text(receiver: &syn::Receiver) -> String {
    match &receiver.reference {
        Some((_, lifetime)) => {
            let mut out = String::from("&");
            if let Some(lifetime) = lifetime {
                out.push_str(&lifetime.to_string());
                out.push(' ');
            }
            if receiver.mutability.is_some() {
                out.push_str("mut ");
            }
            out.push_str("self");
            out
        }
        None => "self".to_string(),
    }
}

/// Reconstruct `///` doc comment lines from the method's `#[doc]` attributes,
/// preserving source order. No documentation yields an empty list and the
/// templates synthesize a minimal default.
fn doc_lines(item: &TraitItemFn) -> Vec<String> {
    let mut lines = Vec::new();
    for attr in &item.attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        let Meta::NameValue(name_value) = &attr.meta else {
            continue;
        };
        if let syn::Expr::Lit(expr_lit) = &name_value.value {
            if let syn::Lit::Str(lit) = &expr_lit.lit {
                // a block doc comment carries all its lines in one literal
                for line in lit.value().split('\n') {
                    lines.push(format!("///{}", line));
                }
            }
        }
    }
    lines
}
