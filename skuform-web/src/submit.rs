//! Browser-side submission: the tree goes to the developer console.
use skuform_core::{Ack, FormTree, SubmitHandler};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebSubmitError {
    #[error("could not encode the option tree: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSubmitter;

impl SubmitHandler for ConsoleSubmitter {
    type Error = WebSubmitError;

    fn submit(&self, tree: &FormTree) -> Result<Ack, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let value = serde_wasm_bindgen::to_value(tree)
                .map_err(|err| WebSubmitError::Encode(err.to_string()))?;
            web_sys::console::log_2(&wasm_bindgen::JsValue::from_str("submitted"), &value);
        }
        let json = serde_json::to_string(tree).map_err(|err| WebSubmitError::Encode(err.to_string()))?;
        log::info!("submitted {} options: {json}", tree.option_count());
        Ok(Ack::for_tree(tree))
    }
}
