/// Decision capability supplied by the host platform
///
/// The hook calls exactly one of these per login. Implementations forward the
/// call to whatever the host uses to continue or abort the login.
pub trait AccessApi {
    fn allow(&mut self);
    fn deny(&mut self, reason: &str);
}

impl<A: AccessApi + ?Sized> AccessApi for &mut A {
    fn allow(&mut self) {
        (**self).allow()
    }

    fn deny(&mut self, reason: &str) {
        (**self).deny(reason)
    }
}

impl<A: AccessApi + ?Sized> AccessApi for Box<A> {
    fn allow(&mut self) {
        (**self).allow()
    }

    fn deny(&mut self, reason: &str) {
        (**self).deny(reason)
    }
}

/// The `api` object handed to a post-login hook
///
/// Only the `access` capability is used; the host owns everything else
/// (tokens, sessions, redirects).
#[derive(Debug, Clone, Default)]
pub struct PostLoginApi<A> {
    pub access: A,
}

impl<A: AccessApi> PostLoginApi<A> {
    pub fn new(access: A) -> Self {
        Self { access }
    }

    pub fn into_access(self) -> A {
        self.access
    }
}
