//! Global CSS styles for InspireFlow.
//!
//! Warm editorial aesthetic: big serif quote type on parchment, sunrise
//! gradients on the controls.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PARCHMENT (Backgrounds) */
  --parchment: #fdf8f0;
  --parchment-deep: #f7efe2;

  /* INK (Text) */
  --ink: #374151;
  --ink-soft: #4b5563;
  --ink-muted: #6b7280;

  /* SUNRISE (Navigation accents) */
  --sunrise-pink: #f472b6;
  --sunrise-rose: #f9a8d4;
  --sunrise-gold: #fde047;

  /* DUSK (Refresh button) */
  --dusk-indigo: #4f46e5;
  --dusk-purple: #6b21a8;
  --dusk-pink: #ec4899;

  /* SEMANTIC */
  --danger: #b91c1c;
  --danger-bg: #fef2f2;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-small-caps: 'Cinzel', 'Trajan Pro', serif;
  --font-body: 'Lato', 'Helvetica Neue', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
}

body {
  background: linear-gradient(160deg, var(--parchment) 0%, var(--parchment-deep) 100%);
  color: var(--ink);
  font-family: var(--font-body);
  -webkit-font-smoothing: antialiased;
}

/* === Page Layout === */
.page {
  position: relative;
  display: flex;
  flex-direction: column;
  width: 100%;
  min-height: 100vh;
}

.page-body {
  flex: 1;
  display: flex;
  flex-direction: column;
  padding: 7rem 2rem 5rem;
}

.page-body-centered {
  justify-content: center;
  align-items: center;
}

.page-loading,
.page-error {
  margin: auto;
  font-family: var(--font-small-caps);
  font-size: 1.25rem;
  color: var(--ink-muted);
  letter-spacing: 0.05em;
}

.page-error {
  color: var(--danger);
}

/* === Header === */
.site-header {
  position: absolute;
  top: 1.5rem;
  left: 2.5rem;
  right: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  z-index: 10;
}

.site-logo {
  font-family: var(--font-serif);
  font-size: 1.75rem;
  font-weight: 900;
  letter-spacing: 0.02em;
  background: linear-gradient(90deg, var(--dusk-indigo), var(--dusk-pink));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.btn-nav {
  padding: 0.5rem 1.25rem;
  border: none;
  cursor: pointer;
  color: var(--ink);
  font-family: var(--font-body);
  font-weight: 500;
  font-size: 0.9rem;
  background: linear-gradient(90deg, var(--sunrise-pink), var(--sunrise-rose), var(--sunrise-gold));
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
  transition: box-shadow var(--transition-normal), filter var(--transition-normal);
}

.btn-nav:hover {
  filter: saturate(1.4);
  box-shadow: 0 4px 10px rgba(0, 0, 0, 0.2);
}

/* === Today's Date === */
.today-date {
  font-family: var(--font-small-caps);
  font-size: 1.5rem;
  text-align: right;
  color: var(--ink-soft);
  letter-spacing: 0.05em;
  margin-bottom: 1rem;
}

/* === Quote Box === */
.quote-box {
  width: 100%;
  max-width: 64rem;
  margin: 1rem auto 0;
}

.quote-text {
  font-family: var(--font-serif);
  font-weight: 900;
  font-size: clamp(1.5rem, 4.5vw, 3.5rem);
  line-height: 1.375;
  letter-spacing: 0.025em;
  text-align: left;
  color: var(--ink-soft);
  margin-bottom: 1rem;
}

.quote-divider {
  width: 100%;
  border: none;
  border-top: 1px solid var(--ink-muted);
  margin: 1.5rem 0;
}

.quote-author {
  font-family: var(--font-small-caps);
  font-style: italic;
  font-size: clamp(1.125rem, 2.5vw, 1.75rem);
  text-align: right;
  color: var(--ink-muted);
}

/* === Refresh Button === */
.btn-new-quote {
  margin-top: 1.5rem;
  padding: 0.75rem 1.5rem;
  border: none;
  cursor: pointer;
  color: #ffffff;
  font-family: var(--font-body);
  font-size: 0.95rem;
  background: linear-gradient(90deg, var(--dusk-indigo), var(--dusk-purple), var(--dusk-purple));
  transition: background var(--transition-normal), opacity var(--transition-normal);
}

.btn-new-quote:hover:not(:disabled) {
  background: linear-gradient(90deg, var(--dusk-indigo), var(--dusk-purple), var(--dusk-pink));
}

.btn-new-quote.disabled,
.btn-new-quote:disabled {
  background: linear-gradient(90deg, #a5b4fc, #f9a8d4);
  opacity: 0.6;
  cursor: not-allowed;
}

/* === Error Banner === */
.quote-error {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 1.5rem;
  padding: 0.75rem 1rem;
  background: var(--danger-bg);
  border-left: 3px solid var(--danger);
  color: var(--danger);
  font-size: 0.9rem;
}

.quote-error-dismiss {
  border: none;
  background: none;
  cursor: pointer;
  color: var(--danger);
  font-size: 0.9rem;
  line-height: 1;
}

/* === Footer === */
.site-footer {
  position: absolute;
  bottom: 1.25rem;
  right: 1.25rem;
  text-align: right;
}

.footer-attribution {
  font-size: 0.875rem;
  color: var(--ink-soft);
}

.footer-attribution a {
  color: inherit;
  font-weight: 500;
  text-decoration: none;
}

.footer-attribution a:hover {
  text-decoration: underline;
}

.footer-limit {
  font-size: 0.75rem;
  color: var(--ink-muted);
}
"#;
