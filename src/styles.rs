use stylist::GlobalStyle;

/// Registers the site-wide stylesheet. Page specific rules live with the pages.
pub fn install() {
    if let Err(e) = GlobalStyle::new(GLOBAL_CSS) {
        log::error!("failed to register global styles: {}", e);
    }
}

const GLOBAL_CSS: &str = r#"
:root {
    --brand: #e4572e;
    --brand-dark: #b8421f;
    --ink: #1f2933;
    --muted: #52606d;
    --surface: #ffffff;
    --surface-alt: #f5f7fa;
    --header-height: 64px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--ink);
    background: var(--surface);
    line-height: 1.6;
    padding-bottom: 72px;
}

a {
    color: var(--brand);
}

.container {
    width: 100%;
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 1.25rem;
}

.header {
    position: sticky;
    top: 0;
    z-index: 100;
    background: rgba(255, 255, 255, 0.95);
    transition: box-shadow 0.25s ease, background 0.25s ease;
}

.header--scrolled {
    background: #ffffff;
    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.12);
}

.header__inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: var(--header-height);
}

.logo {
    font-weight: 800;
    letter-spacing: 0.08em;
    color: var(--brand);
    text-decoration: none;
    font-size: 1.3rem;
}

.nav {
    display: none;
    gap: 1.5rem;
}

.nav a, .mobile-nav a {
    color: var(--ink);
    text-decoration: none;
    font-weight: 600;
}

.nav a.active, .mobile-nav a.active {
    color: var(--brand);
}

.mobile-menu-btn {
    display: flex;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    padding: 0.5rem;
    cursor: pointer;
    z-index: 120;
}

.mobile-menu-btn span {
    display: block;
    width: 24px;
    height: 2px;
    background: var(--ink);
    transition: transform 0.25s ease, opacity 0.25s ease;
}

.mobile-menu-btn.active span:nth-child(1) {
    transform: translateY(7px) rotate(45deg);
}

.mobile-menu-btn.active span:nth-child(2) {
    opacity: 0;
}

.mobile-menu-btn.active span:nth-child(3) {
    transform: translateY(-7px) rotate(-45deg);
}

.mobile-nav-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.4);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.25s ease;
    z-index: 105;
}

.mobile-nav-overlay.active {
    opacity: 1;
    pointer-events: auto;
}

.mobile-nav {
    position: fixed;
    top: 0;
    right: 0;
    height: 100vh;
    width: 75%;
    max-width: 320px;
    background: #ffffff;
    transform: translateX(100%);
    transition: transform 0.3s ease;
    z-index: 110;
    padding: calc(var(--header-height) + 1rem) 1.5rem 1.5rem;
}

.mobile-nav.active {
    transform: translateX(0);
}

.mobile-nav__links {
    list-style: none;
    margin: 0;
    padding: 0;
}

.mobile-nav__links li {
    padding: 0.75rem 0;
    border-bottom: 1px solid #e4e7eb;
}

@media (min-width: 768px) {
    .nav {
        display: flex;
    }
    .mobile-menu-btn, .mobile-nav, .mobile-nav-overlay {
        display: none;
    }
    body {
        padding-bottom: 0;
    }
}

.btn {
    display: inline-block;
    padding: 0.85rem 1.5rem;
    border-radius: 8px;
    border: 2px solid transparent;
    font-weight: 700;
    font-size: 1rem;
    cursor: pointer;
    text-align: center;
    text-decoration: none;
}

.btn--primary {
    background: var(--brand);
    color: #ffffff;
}

.btn--primary:hover {
    background: var(--brand-dark);
}

.btn--secondary {
    background: transparent;
    border-color: #ffffff;
    color: #ffffff;
}

.btn--full {
    width: 100%;
}

.btn--small {
    padding: 0.5rem 1rem;
    font-size: 0.9rem;
}

.page {
    padding: 2.5rem 0 3rem;
}

.page h1 {
    font-size: 2rem;
    margin-top: 0;
}

.page__section {
    margin-bottom: 2.5rem;
}

@keyframes fadeUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

.animate-on-load {
    animation: fadeUp 0.6s ease both;
}

.reveal.reveal--pending {
    opacity: 0;
    transform: translateY(20px);
}

.reveal.visible {
    opacity: 1;
    transform: none;
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.delay-1 { animation-delay: 0.1s; transition-delay: 0.1s; }
.delay-2 { animation-delay: 0.2s; transition-delay: 0.2s; }
.delay-3 { animation-delay: 0.3s; transition-delay: 0.3s; }

@media (prefers-reduced-motion: reduce) {
    .animate-on-load, .reveal, .reveal.reveal--pending, .reveal.visible {
        animation: none;
        transition: none;
        opacity: 1;
        transform: none;
    }
}

.mobile-cta {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    display: flex;
    z-index: 90;
}

.cta-button {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.9rem;
    color: #ffffff;
    font-weight: 700;
    text-decoration: none;
}

.cta-call {
    background: var(--brand);
}

.cta-whatsapp {
    background: #25d366;
}

@media (min-width: 768px) {
    .mobile-cta {
        display: none;
    }
}

.footer {
    background: var(--ink);
    color: #cbd2d9;
    padding: 3rem 0 1.5rem;
}

.footer h3 {
    color: #ffffff;
}

.footer__content {
    display: grid;
    gap: 2rem;
}

@media (min-width: 768px) {
    .footer__content {
        grid-template-columns: repeat(3, 1fr);
    }
}

.footer__links, .footer__contact {
    list-style: none;
    padding: 0;
    margin: 0;
}

.footer__links a {
    color: #cbd2d9;
    text-decoration: none;
}

.footer__contact li {
    display: flex;
    gap: 0.5rem;
    align-items: flex-start;
    margin-bottom: 0.5rem;
}

.footer__bottom {
    border-top: 1px solid #3e4c59;
    margin-top: 2rem;
    padding-top: 1rem;
    font-size: 0.85rem;
    text-align: center;
}

.map__embed {
    border-radius: 12px;
    overflow: hidden;
    background: var(--surface-alt);
}

.map-placeholder {
    padding: 2rem;
    text-align: center;
}
"#;
