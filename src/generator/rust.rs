use std::collections::HashSet;
use std::ops::RangeInclusive;

use check_keyword::CheckKeyword;
use heck::ToSnakeCase;
use quote::format_ident;
use syn::{parse_quote, Attribute, Expr, FnArg, Ident, Item, Type};
use tracing::warn;

use super::{
    enumerator::{NormalizedEnum, NormalizedValue},
    type_map::TypeNameMapper,
    DuplicateNameAction,
};
use crate::error::{Error, Result};
use crate::registry::{EnumKind, EnumValue, ParameterSpec, PassMode};

/// Renders normalized declarations as Rust items.
pub struct RustAssembler {
    duplicate_names: DuplicateNameAction,
    output_items: Vec<Item>,
    raw_constants: Vec<Item>,
}

impl RustAssembler {
    pub fn new(duplicate_names: DuplicateNameAction) -> Self {
        Self {
            duplicate_names,
            output_items: Vec::new(),
            raw_constants: Vec::new(),
        }
    }

    fn name_to_ident(name: &str) -> Ident {
        if ["crate", "self", "super", "Self"].contains(&name) {
            // These are keywords that are not allowed as raw identifiers
            format_ident!("{}_", name)
        } else if name.is_keyword() {
            format_ident!("r#{}", name)
        } else {
            format_ident!("{}", name)
        }
    }

    /// Enumerator and type names come out of heuristics and configuration and may not be valid
    /// identifiers, e.g. `1d` for a constant that has no override.
    fn sanitized_ident(context: &str, name: &str) -> Ident {
        let Some(first_char) = name.chars().next() else {
            warn!(context, "Empty name, using `Empty`.");
            return format_ident!("Empty");
        };
        let sanitized = name.replace(|c: char| !c.is_ascii_alphanumeric() && c != '_', "_");
        if sanitized != name {
            warn!(context, name, "Name is not an identifier, replacing invalid characters.");
        }
        if !first_char.is_ascii_alphabetic() && first_char != '_' {
            warn!(context, name, "Name is not an identifier, prefixing `_`.");
            format_ident!("_{}", sanitized)
        } else if sanitized == "_" {
            format_ident!("__")
        } else {
            Self::name_to_ident(&sanitized)
        }
    }

    fn doc_attrs(comment: Option<&str>) -> Vec<Attribute> {
        comment
            .map(|c| {
                let c = format!(" {c}");
                parse_quote!(#[doc = #c])
            })
            .into_iter()
            .collect()
    }

    /// The newtype's inner type and the values it can hold.
    fn repr_type(normalized: &NormalizedEnum) -> Result<(Type, RangeInclusive<i128>)> {
        Ok(match (normalized.kind, normalized.bit_width) {
            (EnumKind::Enum, 32) => (
                parse_quote!(i32),
                i128::from(i32::MIN)..=i128::from(i32::MAX),
            ),
            (EnumKind::Enum, 64) => (
                parse_quote!(i64),
                i128::from(i64::MIN)..=i128::from(i64::MAX),
            ),
            (EnumKind::Bitmask, 32) => (parse_quote!(u32), 0..=i128::from(u32::MAX)),
            (EnumKind::Bitmask, 64) => (parse_quote!(u64), 0..=i128::from(u64::MAX)),
            (_, bit_width) => {
                return Err(Error::UnknownBitWidth {
                    name: normalized.raw_type_name.clone(),
                    bit_width,
                })
            }
        })
    }

    fn value_expr(value: &NormalizedValue, range: &RangeInclusive<i128>) -> Result<Expr> {
        let literal = value.value.to_string();
        let invalid = || Error::InvalidValue {
            name: value
                .raw_name
                .clone()
                .unwrap_or_else(|| value.name.clone()),
            text: literal.clone(),
        };
        if let EnumValue::Literal(v) = value.value {
            if !range.contains(&v) {
                return Err(invalid());
            }
        }
        syn::parse_str(&literal).map_err(|_| invalid())
    }

    /// Pairs every value with its identifier and drops the values whose identifier was already
    /// taken, as configured.
    fn unique_values<'a>(
        &self,
        normalized: &'a NormalizedEnum,
    ) -> Result<Vec<(Ident, &'a NormalizedValue)>> {
        let mut seen = HashSet::new();
        let mut values = Vec::with_capacity(normalized.values.len());
        for value in &normalized.values {
            let ident = Self::sanitized_ident(&normalized.mapped_type_name, &value.name);
            if seen.insert(ident.to_string()) {
                values.push((ident, value));
                continue;
            }
            match self.duplicate_names {
                DuplicateNameAction::Deny => {
                    return Err(Error::DuplicateName {
                        enum_name: normalized.raw_type_name.clone(),
                        name: ident.to_string(),
                    })
                }
                DuplicateNameAction::Warn => warn!(
                    enum_name = %normalized.raw_type_name,
                    name = %ident,
                    raw_name = value.raw_name.as_deref().unwrap_or_default(),
                    "Dropping enumerator whose normalized name is already taken."
                ),
                DuplicateNameAction::Allow => {}
            }
        }
        Ok(values)
    }

    pub fn visit_enum(&mut self, normalized: &NormalizedEnum) -> Result<()> {
        let (repr, range) = Self::repr_type(normalized)?;
        let name =
            Self::sanitized_ident(&normalized.raw_type_name, &normalized.mapped_type_name);

        let mut consts = Vec::new();
        for (ident, value) in self.unique_values(normalized)? {
            let expr = Self::value_expr(value, &range)?;
            let docs = Self::doc_attrs(value.comment.as_deref());
            consts.push(quote::quote! {
                #(#docs)*
                pub const #ident: Self = Self(#expr);
            });

            match value.raw_name.as_deref().map(syn::parse_str::<Ident>) {
                Some(Ok(raw_ident)) => self.raw_constants.push(parse_quote! {
                    pub const #raw_ident: super::#name = super::#name::#ident;
                }),
                Some(Err(_)) => warn!(
                    raw_name = value.raw_name.as_deref().unwrap_or_default(),
                    "Registry constant is not an identifier, leaving it out of `raw_constants`."
                ),
                None => {}
            }
        }

        let doc = format!(" `{}`", normalized.raw_type_name);
        match normalized.kind {
            EnumKind::Enum => {
                self.output_items.push(parse_quote! {
                    #[doc = #doc]
                    #[repr(transparent)]
                    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
                    pub struct #name(pub #repr);
                });
            }
            EnumKind::Bitmask => {
                self.output_items.push(parse_quote! {
                    #[doc = #doc]
                    #[repr(transparent)]
                    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
                    pub struct #name(pub #repr);
                });
                self.output_items.push(parse_quote! {
                    impl #name {
                        pub const fn is_empty(self) -> bool {
                            self.0 == 0
                        }

                        pub const fn contains(self, other: Self) -> bool {
                            self.0 & other.0 == other.0
                        }
                    }
                });
                self.output_items.push(parse_quote! {
                    impl ::core::ops::BitOr for #name {
                        type Output = Self;
                        fn bitor(self, rhs: Self) -> Self {
                            Self(self.0 | rhs.0)
                        }
                    }
                });
                self.output_items.push(parse_quote! {
                    impl ::core::ops::BitOrAssign for #name {
                        fn bitor_assign(&mut self, rhs: Self) {
                            self.0 |= rhs.0;
                        }
                    }
                });
                self.output_items.push(parse_quote! {
                    impl ::core::ops::BitAnd for #name {
                        type Output = Self;
                        fn bitand(self, rhs: Self) -> Self {
                            Self(self.0 & rhs.0)
                        }
                    }
                });
            }
        }
        self.output_items.push(parse_quote! {
            impl #name {
                #(#consts)*
            }
        });
        Ok(())
    }

    pub fn finish(mut self) -> String {
        let raw_constants = self.raw_constants;
        if !raw_constants.is_empty() {
            self.output_items.push(parse_quote! {
                /// Registry constant names, for code written against the C API.
                pub mod raw_constants {
                    #(#raw_constants)*
                }
            });
        }

        let doc_comment = concat!(
            " Generated by ",
            env!("CARGO_PKG_NAME"),
            " ",
            env!("CARGO_PKG_VERSION")
        );
        let root = syn::File {
            shebang: None,
            attrs: vec![
                parse_quote!(#![doc = #doc_comment]),
                parse_quote!(#![allow(non_upper_case_globals, dead_code)]),
            ],
            items: self.output_items,
        };
        prettyplease::unparse(&root)
    }
}

/// The Rust type a parameter is passed as, e.g. `Option<&mut *mut Foo>`.
pub fn parameter_type(param: &ParameterSpec, mapper: &dyn TypeNameMapper) -> String {
    let mut type_ = mapper.mapped_name(&param.type_spec.base_name);
    for _ in 0..param.type_spec.indirection.depth() {
        type_ = format!("*mut {type_}");
    }
    let by_reference = match param.pass_mode {
        PassMode::Value => return type_,
        PassMode::Reference => format!("&{type_}"),
        PassMode::Out => format!("&mut {type_}"),
    };
    if param.is_optional {
        format!("Option<{by_reference}>")
    } else {
        by_reference
    }
}

pub fn parameter_name(param: &ParameterSpec) -> Ident {
    RustAssembler::sanitized_ident(&param.name, &param.name.to_snake_case())
}

pub fn render_parameter(param: &ParameterSpec, mapper: &dyn TypeNameMapper) -> Result<FnArg> {
    let type_name = parameter_type(param, mapper);
    let type_: Type = syn::parse_str(&type_name).map_err(|_| Error::InvalidValue {
        name: param.name.clone(),
        text: type_name.clone(),
    })?;
    let name = parameter_name(param);
    Ok(parse_quote!(#name: #type_))
}
