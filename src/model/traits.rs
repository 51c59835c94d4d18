/// Token budget used when the caller does not pick one
pub const DEFAULT_MAX_OUTPUT_TOKENS: usize = 500;

/// Text-in, text-out access to a language model.
///
/// Calls are synchronous. Any error is treated as fatal by the evolution
/// loop; wrap the client yourself if you want retries.
pub trait ModelClient {
    fn name(&self) -> &str;

    fn query(&mut self, prompt: &str, max_output_tokens: usize) -> anyhow::Result<String>;
}

impl<M: ModelClient + ?Sized> ModelClient for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn query(&mut self, prompt: &str, max_output_tokens: usize) -> anyhow::Result<String> {
        (**self).query(prompt, max_output_tokens)
    }
}

/// Adapts a closure into a [`ModelClient`]
pub struct FnModel<F> {
    name: String,
    f: F,
}

impl<F> FnModel<F>
where
    F: FnMut(&str, usize) -> anyhow::Result<String>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> ModelClient for FnModel<F>
where
    F: FnMut(&str, usize) -> anyhow::Result<String>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn query(&mut self, prompt: &str, max_output_tokens: usize) -> anyhow::Result<String> {
        (self.f)(prompt, max_output_tokens)
    }
}
