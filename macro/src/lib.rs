use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{ItemFn, parse_macro_input, spanned::Spanned};

/// Runs an `async fn` test to completion on the current thread.
///
/// # Examples
///
/// ```ignore
/// #[loader_response::test]
/// async fn reads_text() -> anyhow::Result<()> {
///     let mut response = loader_response::make_response("hello").await;
///     assert_eq!(response.text().await?, "hello");
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn attr_macro_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    if input.sig.asyncness.is_none() {
        return quote_spanned! { input.sig.fn_token.span()=>
            compile_error!("fn must be `async fn`");
        }
        .into();
    }

    let name = input.sig.ident;

    if !input.sig.inputs.is_empty() {
        return quote_spanned! { input.sig.inputs.span()=>
            compile_error!("arguments to tests are not supported");
        }
        .into();
    }
    let attrs = input.attrs;
    let output = input.sig.output;
    let block = input.block;
    quote! {
        #(#attrs)*
        #[::core::prelude::v1::test]
        pub fn #name() #output {

            async fn __run() #output {
                #block
            }

            ::loader_response::runtime::block_on(async {
                __run().await
            })
        }
    }
    .into()
}
