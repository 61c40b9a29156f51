//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, LitInt, LitStr, Token, parse_macro_input};

/// Derive macro for registering a solver with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["easy", "parsing"])
/// - `submit`: Optional. Parts whose answers are submitted automatically (e.g., [1, 2])
///
/// The type must implement `aoc_solver::Solver`; otherwise compilation fails
/// with an unsatisfied `Solver` bound pointing at the type.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::AutoRegisterSolver;
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(year = 2023, day = 1, tags = ["easy", "parsing"], submit = [1])]
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct AocArgs {
    year: Option<u16>,
    day: Option<u8>,
    tags: Vec<LitStr>,
    submit: Vec<u8>,
}

impl AocArgs {
    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("year") {
            let year: LitInt = meta.value()?.parse()?;
            self.year = Some(year.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let day: LitInt = meta.value()?.parse()?;
            let value: u8 = day.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(day.span(), "day must be between 1 and 25"));
            }
            self.day = Some(value);
        } else if meta.path.is_ident("tags") {
            let content;
            let value = meta.value()?;
            syn::bracketed!(content in value);
            self.tags = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?
                .into_iter()
                .collect();
        } else if meta.path.is_ident("submit") {
            let content;
            let value = meta.value()?;
            syn::bracketed!(content in value);
            for part in Punctuated::<LitInt, Token![,]>::parse_terminated(&content)? {
                let value: u8 = part.base10_parse()?;
                if !(1..=2).contains(&value) {
                    return Err(syn::Error::new(part.span(), "submit parts must be 1 or 2"));
                }
                self.submit.push(value);
            }
        } else {
            return Err(meta.error("expected `year`, `day`, `tags` or `submit`"));
        }
        Ok(())
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoRegisterSolver cannot be derived for generic types",
        ));
    }

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AutoRegisterSolver requires an #[aoc(year = .., day = ..)] attribute",
            )
        })?;

    let mut args = AocArgs::default();
    attr.parse_nested_meta(|meta| args.parse_meta(meta))?;

    let year = args
        .year
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year`"))?;
    let day = args
        .day
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;
    let tags = &args.tags;
    let submit = &args.submit;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
                submit: &[#(#submit),*],
            }
        }
    })
}
