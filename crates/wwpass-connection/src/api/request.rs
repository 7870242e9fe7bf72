use url::form_urlencoded;

/// HTTP methods accepted by the SPFE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpfeMethod {
    Get,
    Post,
}

/// A single SPFE command with its parameters, in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct SpfeRequest {
    method: SpfeMethod,
    command: &'static str,
    params: Vec<(&'static str, Vec<u8>)>,
}

impl SpfeRequest {
    pub(crate) fn get(command: &'static str) -> Self {
        Self::new(SpfeMethod::Get, command)
    }

    pub(crate) fn post(command: &'static str) -> Self {
        Self::new(SpfeMethod::Post, command)
    }

    fn new(method: SpfeMethod, command: &'static str) -> Self {
        Self {
            method,
            command,
            params: Vec::new(),
        }
    }

    pub(crate) fn method(&self) -> SpfeMethod {
        self.method
    }

    pub(crate) fn command(&self) -> &'static str {
        self.command
    }

    pub(crate) fn param(mut self, key: &'static str, value: impl AsRef<[u8]>) -> Self {
        self.params.push((key, value.as_ref().to_vec()));
        self
    }

    /// Adds the parameter unless the value is missing or empty. The SPFE treats an empty value
    /// differently from an absent one, so empty values are never sent.
    pub(crate) fn optional_param(self, key: &'static str, value: Option<impl AsRef<[u8]>>) -> Self {
        match value {
            Some(value) if !value.as_ref().is_empty() => self.param(key, value),
            _ => self,
        }
    }

    /// `application/x-www-form-urlencoded` form of the parameters.
    pub(crate) fn encoded_params(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    form_urlencoded::byte_serialize(key.as_bytes()).collect::<String>(),
                    form_urlencoded::byte_serialize(value).collect::<String>()
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// URL of the command. For `GET` the parameters are part of the URL.
    pub(crate) fn url(&self, base_path: &str) -> String {
        let url = format!("{}/{}.xml", base_path.trim_end_matches('/'), self.command);

        match self.method {
            SpfeMethod::Get if !self.params.is_empty() => {
                format!("{}?{}", url, self.encoded_params())
            }
            _ => url,
        }
    }
}
