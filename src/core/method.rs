//! Named methods a host page may invoke on an attached element.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Option,
    Destroy,
    Focus,
    Blur,
    Value,
    CheckValidity,
}

impl Method {
    pub fn from_name(name: &str) -> Option<Self> {
        let method = match name {
            "option" => Method::Option,
            "destroy" => Method::Destroy,
            "focus" => Method::Focus,
            "blur" => Method::Blur,
            "value" => Method::Value,
            "checkValidity" => Method::CheckValidity,
            _ => return None,
        };
        Some(method)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Option => "option",
            Method::Destroy => "destroy",
            Method::Focus => "focus",
            Method::Blur => "blur",
            Method::Value => "value",
            Method::CheckValidity => "checkValidity",
        }
    }
}
