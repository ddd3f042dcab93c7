//! Procedural macros used by `scaled-core`.
//!
//! `scaled-derive` is an implementation detail of this workspace. Both macros expand to `typenum` type paths, so the
//! generated code needs a `typenum` module reachable from the path they are given.
//!
//! # `#[derive(Unit)]`
//!
//! The `Unit` derive expands in terms of `crate::Unit` and `crate::typenum`, so it is intended to be used by
//! `scaled-core` (or by crates that expose an identical crate-root API). For a unit marker type `MyUnit` it implements
//! `crate::Unit for MyUnit`, turning the integer literals of the ratio into `typenum` unsigned integers.
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "ms"`: displayed unit symbol
//! - `ratio = 1 / 1000` or `ratio = 60`: size of one tick in base units, in lowest terms
//!
//! # `uint!`
//!
//! `uint!(path; 3000)` expands to the `typenum` unsigned integer type for the literal, rooted at `path::typenum`.
//! `scaled-core` calls it from its `ratio!` macro with `$crate` as the path.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2, TokenTree};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitInt, LitStr, Token,
};

/// Derive `crate::Unit` for a named unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol` and `ratio`.
///
/// This macro is intended for use by `scaled-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Expand an integer literal into a `typenum` unsigned integer type.
///
/// Input is `<path>; <literal>`, where `<path>` is the crate root that re-exports `typenum`.
#[doc(hidden)]
#[proc_macro]
pub fn uint(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as UintInput);

    match input.value.base10_parse::<u64>() {
        Ok(value) => uint_type(&input.prefix, value).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;
    let (num, den) = unit_attr.ratio.validate()?;

    let symbol = &unit_attr.symbol;
    let root = quote!(crate);
    let num_ty = uint_type(&root, num);
    let den_ty = uint_type(&root, den);

    let expanded = quote! {
        impl crate::Unit for #name {
            type Num = #num_ty;
            type Den = #den_ty;
            const NUM: u64 = #num;
            const DEN: u64 = #den;
            const SYMBOL: &'static str = #symbol;
        }
    };

    Ok(expanded)
}

/// Binary `typenum` encoding of `value`: `UInt<UInt<UTerm, B1>, B0>` is 2, most significant bit innermost.
fn uint_type(root: &TokenStream2, value: u64) -> TokenStream2 {
    let mut ty = quote!(#root::typenum::UTerm);
    let width = u64::BITS - value.leading_zeros();
    for shift in (0..width).rev() {
        let bit = if (value >> shift) & 1 == 1 {
            quote!(#root::typenum::B1)
        } else {
            quote!(#root::typenum::B0)
        };
        ty = quote!(#root::typenum::UInt<#ty, #bit>);
    }
    ty
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

struct UintInput {
    prefix: TokenStream2,
    value: LitInt,
}

impl Parse for UintInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut prefix = TokenStream2::new();
        while !input.peek(Token![;]) {
            if input.is_empty() {
                return Err(input.error("expected `;` after the crate path"));
            }
            let tt: TokenTree = input.parse()?;
            prefix.extend(core::iter::once(tt));
        }
        input.parse::<Token![;]>()?;
        let value = input.parse()?;
        Ok(UintInput { prefix, value })
    }
}

/// `ratio = N` or `ratio = N / D`.
struct RatioLiteral {
    num: LitInt,
    den: Option<LitInt>,
}

impl RatioLiteral {
    fn validate(&self) -> syn::Result<(u64, u64)> {
        let num = self.num.base10_parse::<u64>()?;
        let den = match &self.den {
            Some(den) => den.base10_parse::<u64>()?,
            None => 1,
        };

        if num == 0 {
            return Err(syn::Error::new(self.num.span(), "unit ratio numerator must be non-zero"));
        }
        if den == 0 {
            let span = self.den.as_ref().map_or_else(|| self.num.span(), |d| d.span());
            return Err(syn::Error::new(span, "unit ratio denominator must be non-zero"));
        }
        let g = gcd(num, den);
        if g != 1 {
            return Err(syn::Error::new(
                self.num.span(),
                format!(
                    "unit ratio {}/{} is not in lowest terms; write {}/{}",
                    num,
                    den,
                    num / g,
                    den / g
                ),
            ));
        }

        Ok((num, den))
    }
}

impl Parse for RatioLiteral {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let num = input.parse()?;
        let den = if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(RatioLiteral { num, den })
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    ratio: RatioLiteral,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut ratio: Option<RatioLiteral> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute { symbol, ratio })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
