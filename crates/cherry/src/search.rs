//! Search triggers: elements that ask the page to open its search UI.

/// What a search trigger asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    /// Class of the element that fired.
    pub class_name: String,
    /// Where the search should go.
    pub url: String,
}

/// Integrator hook that opens the page's search UI.
pub trait SearchHandler {
    fn open_search(&self, request: &SearchRequest);
}

impl<F: Fn(&SearchRequest)> SearchHandler for F {
    fn open_search(&self, request: &SearchRequest) {
        self(request)
    }
}

/// A search trigger class bound to its handler.
pub struct SearchTrigger<H> {
    request: SearchRequest,
    handler: H,
}

impl<H: SearchHandler> SearchTrigger<H> {
    pub fn new(class_name: impl Into<String>, url: impl Into<String>, handler: H) -> Self {
        Self {
            request: SearchRequest {
                class_name: class_name.into(),
                url: url.into(),
            },
            handler,
        }
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// One of the trigger elements was tapped.
    pub fn fire(&self) {
        self.handler.open_search(&self.request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_fire_passes_class_and_url() {
        let seen = RefCell::new(Vec::new());
        let trigger = SearchTrigger::new("search-icon", "/search", |request: &SearchRequest| {
            seen.borrow_mut().push(request.clone());
        });

        trigger.fire();
        trigger.fire();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].class_name, "search-icon");
        assert_eq!(seen[0].url, "/search");
    }
}
