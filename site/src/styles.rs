//! CSS for the landing page.
//!
//! One stylesheet, inlined into the document head. It covers the page
//! shell (blueprint grid, frame, noise), the sections, the hover
//! affordances of the cards, the looping hero motion, and the fallbacks
//! for visitors without JavaScript or with reduced motion enabled.
//!
//! Reveal blocks get their opacity and transform from inline styles written
//! by the server (hidden) and the client (visible), so nothing here sets
//! them except the fallbacks, which override with `!important`.

/// Complete stylesheet for the landing page.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #000000;
    --bg-primary: #050608;
    --bg-zinc: rgba(9, 9, 11, 0.5);
    --text: #ffffff;
    --text-muted: #9ca3af;
    --text-dim: #6b7280;
    --text-faint: #4b5563;
    --accent: #91b3f0;
    --accent-rgb: 145, 179, 240;
    --cyan: #06b6d4;
    --cyan-rgb: 14, 165, 233;
    --purple: #a855f7;
    --purple-light: #c084fc;
    --purple-rgb: 168, 85, 247;
    --line: rgba(255, 255, 255, 0.05);
    --line-strong: rgba(255, 255, 255, 0.1);
    --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
    overflow-x: hidden;
}

::selection {
    background: rgba(var(--cyan-rgb), 0.3);
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
    max-width: 100%;
}

/* ---------------------------------------------------------------- shell */

.page {
    position: relative;
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.025) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.025) 1px, transparent 1px);
    background-size: 80px 80px;
}

.blueprint-grid-fine {
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.04) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.04) 1px, transparent 1px);
    background-size: 20px 20px;
}

.global-frame {
    position: fixed;
    inset: 12px;
    border: 1px solid var(--line);
    pointer-events: none;
    z-index: 100;
}

.noise-bg {
    position: fixed;
    inset: 0;
    opacity: 0.03;
    pointer-events: none;
    z-index: 90;
    background-image: url("data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='160' height='160'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
}

.container {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 2rem;
}

.layered {
    position: relative;
    z-index: 10;
}

.layer {
    position: absolute;
    inset: 0;
    z-index: 0;
}

.two-col {
    display: grid;
    gap: 6rem;
    align-items: center;
}

@media (min-width: 1024px) {
    .two-col {
        grid-template-columns: 1fr 1fr;
    }
}

.section {
    position: relative;
    display: flex;
    align-items: center;
    padding: 8rem 0;
    overflow: hidden;
}

.section-primary {
    background: var(--bg-primary);
}

.section-light {
    background: #ffffff;
    color: #000000;
    overflow: visible;
}

.section-dark {
    background: var(--bg-zinc);
    padding: 10rem 0;
}

.glass-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid var(--line-strong);
    backdrop-filter: blur(16px);
    -webkit-backdrop-filter: blur(16px);
}

.text-gradient {
    background: linear-gradient(90deg, var(--accent), #ffffff 50%, var(--purple-light));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.text-accent {
    color: var(--accent);
}

.text-purple {
    color: var(--purple-light);
}

.mono-technical {
    font-family: var(--font-mono);
}

.hover-glow-cyan,
.hover-glow-purple {
    transition: box-shadow 0.7s ease, border-color 0.7s ease, transform 0.7s ease, background 0.5s ease;
}

.hover-glow-cyan:hover {
    border-color: rgba(var(--cyan-rgb), 0.5);
    box-shadow: 0 0 30px rgba(var(--cyan-rgb), 0.25), inset 0 0 20px rgba(var(--cyan-rgb), 0.08);
}

.hover-glow-purple:hover {
    border-color: rgba(var(--purple-rgb), 0.5);
    box-shadow: 0 0 30px rgba(var(--purple-rgb), 0.25), inset 0 0 20px rgba(var(--purple-rgb), 0.08);
}

.blueprint-corner {
    position: relative;
}

.blueprint-corner::before,
.blueprint-corner::after {
    content: '';
    position: absolute;
    width: 16px;
    height: 16px;
    z-index: 40;
    pointer-events: none;
}

.corner-tl::before {
    top: 8px;
    left: 8px;
    border-top: 1px solid rgba(var(--accent-rgb), 0.6);
    border-left: 1px solid rgba(var(--accent-rgb), 0.6);
}

.corner-tr::before {
    top: 8px;
    right: 8px;
    border-top: 1px solid rgba(var(--accent-rgb), 0.6);
    border-right: 1px solid rgba(var(--accent-rgb), 0.6);
}

.corner-br::after {
    bottom: 8px;
    right: 8px;
    border-bottom: 1px solid rgba(var(--accent-rgb), 0.6);
    border-right: 1px solid rgba(var(--accent-rgb), 0.6);
}

.scanner-line {
    position: absolute;
    left: 0;
    width: 100%;
    height: 2px;
    top: 0;
    z-index: 35;
    opacity: 0;
    pointer-events: none;
    background: linear-gradient(90deg, transparent, rgba(var(--cyan-rgb), 0.8), transparent);
    box-shadow: 0 0 12px rgba(var(--cyan-rgb), 0.6);
    animation: scan 3s linear infinite;
    transition: opacity 1.5s ease;
}

.scanner-line-purple {
    background: linear-gradient(90deg, transparent, rgba(var(--purple-rgb), 0.8), transparent);
    box-shadow: 0 0 12px rgba(var(--purple-rgb), 0.6);
}

@keyframes scan {
    from { top: 0; }
    to { top: 100%; }
}

.icon {
    width: 1.25rem;
    height: 1.25rem;
    flex-shrink: 0;
}

.icon-sm {
    width: 1rem;
    height: 1rem;
}

.icon-lg {
    width: 2rem;
    height: 2rem;
}

.eyebrow {
    display: block;
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.5em;
    text-transform: uppercase;
    margin-bottom: 1.5rem;
}

/* ------------------------------------------------------------------ nav */

.nav {
    position: fixed;
    width: 100%;
    z-index: 110;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(40px);
    -webkit-backdrop-filter: blur(40px);
    border-bottom: 1px solid var(--line);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 1.25rem 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.5rem;
    font-weight: 900;
    letter-spacing: -0.05em;
    animation: fade-in 0.6s ease-out both;
}

.nav-brand-main {
    transition: color 0.3s ease;
}

.nav-brand:hover .nav-brand-main {
    color: var(--accent);
}

.nav-brand-accent {
    filter: drop-shadow(0 0 15px rgba(var(--accent-rgb), 0.3));
}

.nav-links {
    display: none;
    align-items: center;
    gap: 3rem;
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.3em;
    color: var(--text-muted);
}

.nav-link {
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: var(--text);
}

.nav-cta {
    padding: 0.75rem 2rem;
    border: 1px solid rgba(var(--accent-rgb), 0.2);
    background: rgba(var(--accent-rgb), 0.05);
    border-radius: 9999px;
    color: var(--text);
    letter-spacing: 0.15em;
    transition: all 0.5s ease;
}

.nav-cta:hover {
    background: #ffffff;
    color: #000000;
    box-shadow: 0 0 20px rgba(var(--accent-rgb), 0.3);
}

.nav-mobile-cta {
    font-size: 9px;
    font-weight: 900;
    letter-spacing: 0.1em;
    padding: 0.5rem 1rem;
    border: 1px solid var(--line-strong);
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.05);
}

@media (min-width: 768px) {
    .nav-inner {
        padding: 1.5rem 2rem;
    }

    .nav-brand {
        font-size: 1.875rem;
    }

    .nav-links {
        display: flex;
    }

    .nav-mobile {
        display: none;
    }
}

/* ----------------------------------------------------------------- hero */

.hero {
    position: relative;
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.hero-grid {
    opacity: 0.2;
}

.hero-shade {
    position: absolute;
    inset: 0;
    z-index: 10;
    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), #000000);
}

.hero-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.5;
    filter: grayscale(1) contrast(1.25);
    animation: hero-zoom 15s linear infinite alternate;
}

@keyframes hero-zoom {
    from { transform: scale(1.25); }
    to { transform: scale(1); }
}

.hero-glow-horizontal {
    position: absolute;
    top: 50%;
    left: 0;
    width: 50%;
    height: 1px;
    z-index: 20;
    background: rgba(var(--cyan-rgb), 0.2);
    filter: blur(12px);
}

.hero-glow-vertical {
    position: absolute;
    top: 0;
    right: 25%;
    width: 1px;
    height: 100%;
    z-index: 20;
    background: rgba(var(--purple-rgb), 0.1);
    filter: blur(24px);
}

.hero-content {
    position: relative;
    z-index: 20;
    text-align: center;
    padding: 0 1.5rem;
    max-width: 72rem;
    margin: 0 auto;
}

.hero-eyebrow {
    color: var(--accent);
    font-weight: 900;
    letter-spacing: 0.5em;
    text-transform: uppercase;
    font-size: 0.875rem;
    margin: 0 0 2rem;
}

.hero-title {
    font-size: clamp(3rem, 14vw, 140px);
    font-weight: 900;
    line-height: 0.9;
    letter-spacing: -0.02em;
    margin: 0 0 3rem;
}

.hero-title-accent {
    display: inline-block;
    padding-right: 0.25rem;
    filter: drop-shadow(0 0 50px rgba(var(--accent-rgb), 0.2));
}

.hero-lead {
    color: var(--text-muted);
    font-size: 1.25rem;
    font-weight: 300;
    line-height: 1.6;
    max-width: 48rem;
    margin: 0 auto 4rem;
}

.hero-lead-strong {
    color: rgba(255, 255, 255, 0.8);
}

.btn-explore {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem 3rem;
    font-weight: 700;
    color: var(--text);
    background: rgba(var(--accent-rgb), 0.2);
    border: 1px solid rgba(var(--accent-rgb), 0.3);
    border-radius: 9999px;
    box-shadow: 0 0 50px rgba(var(--accent-rgb), 0.1);
    backdrop-filter: blur(12px);
    transition: all 0.5s ease;
}

.btn-explore:hover {
    background: rgba(var(--accent-rgb), 0.3);
    transform: scale(1.05);
}

.btn-explore:active {
    transform: scale(0.95);
}

.btn-explore-arrow {
    margin-left: 0.75rem;
    transition: transform 0.3s ease;
}

.btn-explore:hover .btn-explore-arrow {
    transform: translateX(6px);
}

.scroll-indicator {
    position: absolute;
    bottom: 3rem;
    left: 50%;
    z-index: 20;
    opacity: 0.2;
    animation: bob 3s ease-in-out infinite;
}

.scroll-indicator-line {
    width: 1px;
    height: 4rem;
    background: linear-gradient(to bottom, transparent, #ffffff, transparent);
}

@keyframes bob {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, 15px); }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@media (min-width: 768px) {
    .hero-eyebrow {
        font-size: 1rem;
    }

    .hero-title {
        letter-spacing: -0.06em;
        line-height: 0.8;
    }

    .hero-lead {
        font-size: 1.5rem;
    }
}

/* ---------------------------------------------------------------- about */

.eyebrow-row {
    display: flex;
    align-items: center;
    margin-bottom: 3rem;
}

.eyebrow-row .eyebrow {
    margin-bottom: 0;
    letter-spacing: 0.4em;
}

.eyebrow-rule {
    height: 1px;
    width: 5rem;
    background: var(--accent);
    margin-right: 1.5rem;
}

.heading-xl {
    font-size: clamp(2.5rem, 10vw, 84px);
    font-weight: 900;
    line-height: 1;
    letter-spacing: -0.05em;
    margin: 0 0 3rem;
}

.about-copy {
    display: grid;
    gap: 3rem;
    font-size: 1.25rem;
    font-weight: 300;
    line-height: 1.6;
    color: var(--text-dim);
}

.about-point {
    margin: 0;
    padding-left: 2rem;
    border-left: 2px solid var(--line-strong);
    transition: border-color 0.3s ease;
}

.about-point-hover:hover {
    border-color: var(--accent);
}

.about-point-title {
    display: block;
    color: var(--text);
    font-weight: 900;
    font-size: 1.5rem;
    letter-spacing: -0.02em;
    margin-bottom: 1.5rem;
}

.underline-accent,
.underline-purple {
    color: var(--text);
    font-weight: 700;
    text-decoration: underline;
    text-decoration-thickness: 8px;
    text-underline-offset: 8px;
}

.underline-accent {
    text-decoration-color: rgba(var(--accent-rgb), 0.3);
}

.underline-purple {
    text-decoration-color: rgba(var(--purple-rgb), 0.3);
}

.bridge {
    position: relative;
}

.bridge-halo {
    position: absolute;
    inset: -2rem;
    border-radius: 3rem;
    filter: blur(80px);
    opacity: 0.4;
    background: linear-gradient(90deg, rgba(8, 145, 178, 0.2), rgba(37, 99, 235, 0.1), rgba(147, 51, 234, 0.2));
    transition: opacity 1s ease;
}

.bridge:hover .bridge-halo {
    opacity: 1;
}

.bridge-card {
    position: relative;
    border-radius: 3rem;
    padding: 4rem;
    overflow: hidden;
    transition: all 0.7s ease;
}

.bridge:hover .bridge-card {
    transform: scale(1.02);
    background: rgba(255, 255, 255, 0.05);
    border-color: rgba(255, 255, 255, 0.2);
}

.bridge-top-line {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: linear-gradient(90deg, transparent, rgba(var(--cyan-rgb), 0.2), transparent);
}

.bridge-ends {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 3rem;
    margin-bottom: 5rem;
    padding: 0 1rem;
}

.bridge-end {
    text-align: center;
}

.bridge-flag {
    font-size: 3rem;
    margin-bottom: 1.5rem;
}

.bridge-country {
    font-weight: 900;
    font-size: 1.5rem;
    letter-spacing: -0.02em;
}

.bridge-place {
    font-size: 11px;
    color: var(--text-dim);
    letter-spacing: 0.3em;
    text-transform: uppercase;
    font-weight: 900;
    margin-top: 0.5rem;
}

.bridge-link {
    display: none;
    position: relative;
    flex: 1;
    padding: 0 2rem;
}

.bridge-link-rule {
    height: 1px;
    width: 100%;
    background: var(--line-strong);
}

.bridge-link-beam {
    position: absolute;
    top: 50%;
    left: 0;
    width: 100%;
    height: 2px;
    transform: translateY(-50%);
    filter: blur(1px);
    opacity: 0.6;
    background: linear-gradient(90deg, var(--accent), #ffffff, var(--purple));
    transition: opacity 0.7s ease;
}

.bridge:hover .bridge-link-beam {
    opacity: 1;
}

.bridge-link-badge {
    position: absolute;
    top: -1rem;
    left: 50%;
    transform: translateX(-50%);
    padding: 0.375rem 1.5rem;
    border-radius: 9999px;
    font-size: 10px;
    color: var(--accent);
    font-weight: 900;
    letter-spacing: 0.2em;
}

.bridge-notes {
    display: grid;
    gap: 2rem;
}

.role-note {
    display: flex;
    align-items: flex-start;
    gap: 1.5rem;
    padding: 2.5rem;
    border-radius: 1.5rem;
    cursor: pointer;
}

.role-note:hover {
    background: rgba(255, 255, 255, 0.08);
}

.role-dot {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 9999px;
    margin-top: 0.75rem;
    flex-shrink: 0;
}

.dot-cyan {
    background: var(--cyan);
    box-shadow: 0 0 10px rgba(var(--cyan-rgb), 0.8);
}

.dot-purple {
    background: var(--purple);
    box-shadow: 0 0 10px rgba(var(--purple-rgb), 0.8);
}

.role-text {
    margin: 0;
    color: var(--text-muted);
    line-height: 1.6;
}

.strong {
    color: var(--text);
    font-weight: 700;
}

@media (min-width: 768px) {
    .bridge-ends {
        flex-direction: row;
        justify-content: space-between;
        gap: 0;
    }

    .bridge-end {
        width: 33%;
    }

    .bridge-link {
        display: block;
    }
}

/* --------------------------------------------------------------- brands */

.section-header-center {
    text-align: center;
    margin-bottom: 6rem;
}

.heading-brands {
    font-size: clamp(3rem, 12vw, 100px);
    font-weight: 900;
    letter-spacing: -0.05em;
    line-height: 1;
    margin: 0 0 1rem;
}

.header-bar {
    height: 4px;
    width: 6rem;
    background: #000000;
    margin: 0 auto;
}

.brand-grid {
    display: grid;
    gap: 3rem;
}

@media (min-width: 768px) {
    .brand-grid {
        grid-template-columns: 1fr 1fr;
    }
}

.brand-card {
    position: relative;
    overflow: hidden;
    height: 700px;
    background: #000000;
    cursor: pointer;
    border: 1px solid var(--line);
}

.brand-card:hover {
    transform: scale(1.01);
    z-index: 10;
}

.brand-card:hover .scanner-line,
.service-item:hover .scanner-line {
    opacity: 1;
}

.brand-dim {
    position: absolute;
    inset: 0;
    z-index: 10;
    background: rgba(0, 0, 0, 0.4);
    transition: opacity 0.5s ease;
}

.brand-card:hover .brand-dim {
    opacity: 0.1;
}

.brand-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: grayscale(0.8);
    transition: transform 2.5s ease-out, filter 2.5s ease-out;
}

.brand-card:hover .brand-image {
    transform: scale(1.1);
    filter: grayscale(0);
}

.brand-fade {
    position: absolute;
    inset: 0;
    z-index: 20;
    background: linear-gradient(to top, #000000, rgba(0, 0, 0, 0.5), transparent);
}

.brand-body {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    padding: 3rem;
    z-index: 30;
    transform: translateY(2rem);
    transition: transform 0.7s ease-out;
}

.brand-card:hover .brand-body {
    transform: translateY(0);
}

.clip {
    overflow: hidden;
}

.brand-category {
    margin: 0 0 1.5rem;
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.6em;
    text-transform: uppercase;
    opacity: 0;
    transform: translateY(100%);
    transition: all 0.7s ease 0.1s;
}

.brand-name {
    margin: 0 0 2rem;
    color: #ffffff;
    font-size: 3rem;
    font-weight: 900;
    font-style: italic;
    letter-spacing: -0.05em;
    line-height: 1;
}

.brand-description {
    margin: 0;
    max-width: 24rem;
    color: var(--text-muted);
    font-size: 1.125rem;
    font-weight: 300;
    line-height: 1.6;
    opacity: 0;
    transform: translateY(1rem);
    transition: all 0.7s ease 0.3s;
}

.brand-card:hover .brand-category,
.brand-card:hover .brand-description {
    opacity: 1;
    transform: translateY(0);
}

.brand-rule {
    margin-top: 3rem;
    height: 1px;
    width: 0;
    background: linear-gradient(90deg, rgba(255, 255, 255, 0.2), transparent);
    transition: width 1s ease 0.5s;
}

.brand-card:hover .brand-rule {
    width: 100%;
}

@media (min-width: 768px) {
    .brand-body {
        padding: 4rem;
    }

    .brand-name {
        font-size: 4.5rem;
    }
}

/* -------------------------------------------------------------- service */

.service-orb {
    position: absolute;
    border-radius: 9999px;
    filter: blur(160px);
}

.service-orb-cyan {
    top: 0;
    right: 0;
    width: 800px;
    height: 800px;
    background: rgba(var(--cyan-rgb), 0.05);
    transform: translate(50%, -50%);
}

.service-orb-purple {
    bottom: 0;
    left: 0;
    width: 600px;
    height: 600px;
    background: rgba(var(--purple-rgb), 0.05);
    transform: translate(-50%, 50%);
}

.service-header {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    gap: 3rem;
    margin-bottom: 6rem;
    padding-bottom: 5rem;
    border-bottom: 1px solid var(--line);
}

.service-header-main {
    max-width: 48rem;
}

.heading-lg {
    font-size: clamp(2.5rem, 10vw, 80px);
    font-weight: 900;
    letter-spacing: -0.03em;
    line-height: 0.9;
    margin: 0;
}

.service-summary {
    margin: 0;
    max-width: 24rem;
    color: var(--text-dim);
    font-size: 1.25rem;
    font-weight: 300;
    line-height: 1.6;
}

@media (min-width: 1024px) {
    .service-header {
        flex-direction: row;
        align-items: flex-end;
    }

    .service-summary {
        text-align: right;
    }
}

.service-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1px;
    background: var(--line);
    border: 1px solid var(--line);
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

@media (min-width: 640px) {
    .service-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 768px) {
    .service-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}

.service-item {
    position: relative;
    padding: 3rem;
    overflow: hidden;
    cursor: default;
    border-color: var(--line);
}

.service-item:hover {
    background-color: rgba(255, 255, 255, 0.07);
}

.service-sweep {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: linear-gradient(90deg, transparent, rgba(var(--cyan-rgb), 0.2), transparent);
    transform: translateX(-100%);
    transition: transform 1.5s ease-in-out;
}

.service-item:hover .service-sweep {
    transform: translateX(100%);
}

.service-head {
    position: relative;
    z-index: 10;
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 5rem;
}

.service-num {
    position: absolute;
    top: -3.5rem;
    left: -1.5rem;
    font-size: 64px;
    font-weight: 900;
    font-style: italic;
    color: rgba(255, 255, 255, 0.03);
    pointer-events: none;
    transition: color 0.7s ease;
}

.service-item:hover .service-num {
    color: rgba(var(--accent-rgb), 0.08);
}

.service-badge {
    color: var(--accent);
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.5em;
    text-transform: uppercase;
    padding: 0.25rem 0.75rem;
    background: rgba(var(--accent-rgb), 0.1);
    border: 1px solid rgba(var(--accent-rgb), 0.2);
    border-radius: 2px;
}

.service-icon {
    color: rgba(255, 255, 255, 0.2);
    transform: scale(1.25);
    transition: all 0.7s ease;
}

.service-item:hover .service-icon {
    color: var(--accent);
    transform: rotate(360deg) scale(1.5);
}

.service-subtitle {
    margin: 0 0 2rem;
    font-size: 1.875rem;
    font-weight: 900;
    letter-spacing: -0.02em;
    line-height: 1.25;
    transition: color 0.5s ease;
}

.service-item:hover .service-subtitle {
    color: var(--accent);
}

.service-description {
    margin: 0;
    max-width: 280px;
    color: var(--text-muted);
    font-weight: 300;
    line-height: 1.6;
    transition: color 0.5s ease;
}

.service-item:hover .service-description {
    color: #e5e7eb;
}

.service-status {
    margin-top: 3rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    opacity: 0;
    transition: opacity 0.7s ease 0.3s;
}

.service-item:hover .service-status {
    opacity: 1;
}

.service-status-rule {
    width: 2rem;
    height: 1px;
    background: rgba(var(--cyan-rgb), 0.4);
}

.service-status-text {
    font-family: var(--font-mono);
    font-size: 9px;
    color: rgba(var(--cyan-rgb), 0.6);
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

/* -------------------------------------------------------------- contact */

.contact {
    position: relative;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    overflow: hidden;
    background: #000000;
    padding: 10rem 0 6rem;
    border-top: 1px solid var(--line);
}

.contact-grid {
    margin-bottom: 8rem;
    align-items: stretch;
}

.heading-contact {
    font-size: clamp(3rem, 12vw, 88px);
    font-weight: 900;
    letter-spacing: -0.05em;
    line-height: 0.8;
    margin: 0 0 4rem;
}

.office-list {
    display: grid;
    gap: 2rem;
}

.office-card {
    position: relative;
    overflow: hidden;
    padding: 2.5rem;
    border-radius: 2rem;
    cursor: default;
}

.office-label-row {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.office-label {
    font-size: 11px;
    font-weight: 900;
    letter-spacing: 0.4em;
    text-transform: uppercase;
}

.office-city {
    margin: 0 0 0.75rem;
    font-size: 1.875rem;
    font-weight: 900;
}

.office-tagline {
    margin: 0;
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: var(--text-dim);
    font-size: 0.875rem;
}

.contact-side {
    height: 100%;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
}

.partners-title {
    margin: 0 0 4rem;
    font-size: 11px;
    font-weight: 900;
    color: var(--text-dim);
    letter-spacing: 0.5em;
    text-transform: uppercase;
}

.partner-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.partner-link {
    height: 6rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 1rem;
    color: var(--text-dim);
    font-weight: 900;
    letter-spacing: 0.1em;
    transition: all 0.3s ease;
}

.partner-link:hover {
    color: var(--text);
    border-color: rgba(255, 255, 255, 0.2);
}

.inquiry {
    margin-top: 8rem;
}

.inquiry-label {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin: 0 0 2.5rem;
    color: var(--text-dim);
    font-size: 11px;
    font-weight: 900;
    letter-spacing: 0.5em;
    text-transform: uppercase;
}

.inquiry-email {
    font-size: clamp(28px, 4vw, 64px);
    font-weight: 900;
    color: var(--text);
    text-decoration: underline;
    text-decoration-color: rgba(255, 255, 255, 0.05);
    text-decoration-thickness: 2px;
    text-underline-offset: 16px;
    word-break: break-all;
    transition: color 0.3s ease, text-decoration-color 0.3s ease;
}

.inquiry-email:hover {
    color: var(--accent);
    text-decoration-color: rgba(var(--accent-rgb), 0.5);
}

.footer-bar {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    padding-top: 4rem;
    border-top: 1px solid var(--line);
    font-size: 11px;
    color: var(--text-faint);
    font-weight: 900;
    letter-spacing: 0.4em;
    text-transform: uppercase;
}

.footer-bar p {
    margin: 0;
}

.footer-tagline {
    margin-top: 1.5rem;
}

@media (min-width: 768px) {
    .footer-bar {
        flex-direction: row;
    }

    .footer-bar .footer-tagline {
        margin-top: 0;
    }
}

/* ------------------------------------------------------------ fallbacks */

@media (prefers-reduced-motion: reduce) {
    .reveal,
    .reveal-child {
        opacity: 1 !important;
        transform: none !important;
        transition: none !important;
    }

    .hero-image,
    .scroll-indicator,
    .scanner-line,
    .nav-brand {
        animation: none !important;
    }
}
"#;

/// Stylesheet placed in `<noscript>`, and inline when the page ships without
/// a client: without the client nothing would ever leave the hidden phase,
/// so every reveal block is shown as-is.
pub const NOSCRIPT_CSS: &str = r#"
.reveal,
.reveal-child {
    opacity: 1 !important;
    transform: none !important;
}
"#;

/// Content Security Policy for the landing page.
///
/// `wasm-unsafe-eval` lets the reveal client instantiate its module; images
/// may come from an external asset host.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; connect-src 'self'; font-src 'self' data:;";
