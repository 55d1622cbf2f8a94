/// URI parser state machine states, in parse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Expecting the leading ALPHA of a scheme
    SchemeStart,
    /// Inside the scheme, up to `:`
    Scheme,
    /// Expecting the first authority slash
    SlashStart,
    /// Expecting the second authority slash
    Slash,
    /// Committed to userinfo by lookahead; about to open the username span
    UsernameStart,
    /// Inside the username, up to `:` or `@`
    Username,
    /// About to open the password span
    PasswordStart,
    /// Inside the password, up to `@`
    Password,
    /// At the first host byte; selects IP-literal vs reg-name
    HostStart,
    /// Inside the host (sub-grammar chosen by `is_ipv6`)
    Host,
    /// Expecting the first port digit
    PortStart,
    /// Inside the port digits
    Port,
    /// Inside the path, after its leading `/`
    Path,
    /// Inside the query, after `?`
    Query,
    /// Inside the fragment, after `#`
    Fragment,
}
