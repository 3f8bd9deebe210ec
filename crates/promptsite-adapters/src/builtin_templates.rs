//! Built-in site templates.
//!
//! One builder per [`Category`], selected by [`template_for`]. Markup is kept
//! as static fragments; repeated blocks (product cards, menu dishes, pricing
//! plans) are [`Fragment::Repeat`]s whose rows carry the display values.
//!
//! Site-wide slots are `{{NAME}}`, `{{COLOR}}` and `{{PROMPT}}`. Row slots
//! are documented next to each builder.

use promptsite_core::domain::{
    Category, DomainError, Fragment, PageTemplate, Row, SiteTemplate,
};

// ── Public API ────────────────────────────────────────────────────────────────

/// Built-in template for one category.
pub fn template_for(category: Category) -> Result<SiteTemplate, DomainError> {
    match category {
        Category::Ecommerce => ecommerce(),
        Category::Portfolio => portfolio(),
        Category::Restaurant => restaurant(),
        Category::Saas => saas(),
        Category::Blog => blog(),
        Category::Business => business(),
        Category::General => general(),
    }
}

/// Every built-in template, in [`Category::ALL`] order.
pub fn all_templates() -> Result<Vec<SiteTemplate>, DomainError> {
    Category::ALL.into_iter().map(template_for).collect()
}

fn numbered(range: std::ops::RangeInclusive<u32>) -> Vec<Row> {
    range.map(|i| Row::new().slot("INDEX", i)).collect()
}

// ── E-commerce ────────────────────────────────────────────────────────────────
//
// Rows: INDEX, PRICE (dollars; markup appends ".99").

fn ecommerce() -> Result<SiteTemplate, DomainError> {
    let featured = (1..=3)
        .map(|i| Row::new().slot("INDEX", i).slot("PRICE", i * 25 + 24))
        .collect();
    let catalog = (0..8)
        .map(|i| Row::new().slot("INDEX", i + 1).slot("PRICE", i * 10 + 29))
        .collect();

    SiteTemplate::builder(Category::Ecommerce)
        .page(
            PageTemplate::new("home", "Home", "/")
                .markup(ECOMMERCE_HOME_HEAD)
                .repeat(featured, vec![Fragment::markup(ECOMMERCE_FEATURED_CARD)])
                .markup(ECOMMERCE_HOME_TAIL),
        )
        .page(
            PageTemplate::new("shop", "Shop", "/shop")
                .markup(ECOMMERCE_SHOP_HEAD)
                .repeat(catalog, vec![Fragment::markup(ECOMMERCE_SHOP_CARD)])
                .markup(ECOMMERCE_SHOP_TAIL),
        )
        .build()
}

const ECOMMERCE_HOME_HEAD: &str = r##"
<div class="min-h-screen bg-white">
  <nav class="bg-{{COLOR}}-600 text-white p-4">
    <div class="container mx-auto flex justify-between items-center">
      <h1 class="text-2xl font-bold">{{NAME}}</h1>
      <div class="space-x-6">
        <a href="#" class="hover:text-{{COLOR}}-200">Shop</a>
        <a href="#" class="hover:text-{{COLOR}}-200">About</a>
        <a href="#" class="hover:text-{{COLOR}}-200">Contact</a>
        <a href="#" class="hover:text-{{COLOR}}-200">Cart (0)</a>
      </div>
    </div>
  </nav>

  <section class="bg-gradient-to-r from-{{COLOR}}-500 to-{{COLOR}}-700 text-white py-20">
    <div class="container mx-auto px-4 text-center">
      <h2 class="text-5xl font-bold mb-4">Welcome to {{NAME}}</h2>
      <p class="text-xl mb-8">Discover amazing products at unbeatable prices</p>
      <button class="bg-white text-{{COLOR}}-600 px-8 py-3 rounded-full font-semibold hover:bg-gray-100 transition">
        Shop Now
      </button>
    </div>
  </section>

  <section class="py-16">
    <div class="container mx-auto px-4">
      <h3 class="text-3xl font-bold text-center mb-12">Featured Products</h3>
      <div class="grid md:grid-cols-3 gap-8">"##;

const ECOMMERCE_FEATURED_CARD: &str = r##"
        <div class="bg-white rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition">
          <div class="bg-{{COLOR}}-100 h-64 flex items-center justify-center">
            <span class="text-{{COLOR}}-400 text-6xl">📦</span>
          </div>
          <div class="p-6">
            <h4 class="text-xl font-bold mb-2">Product {{INDEX}}</h4>
            <p class="text-gray-600 mb-4">High quality product description goes here</p>
            <div class="flex justify-between items-center">
              <span class="text-2xl font-bold text-{{COLOR}}-600">${{PRICE}}.99</span>
              <button class="bg-{{COLOR}}-600 text-white px-4 py-2 rounded hover:bg-{{COLOR}}-700">
                Add to Cart
              </button>
            </div>
          </div>
        </div>"##;

const ECOMMERCE_HOME_TAIL: &str = r##"
      </div>
    </div>
  </section>
</div>
"##;

const ECOMMERCE_SHOP_HEAD: &str = r##"
<div class="min-h-screen bg-gray-50">
  <div class="container mx-auto px-4 py-12">
    <h1 class="text-4xl font-bold mb-8">All Products</h1>
    <div class="grid md:grid-cols-4 gap-6">"##;

const ECOMMERCE_SHOP_CARD: &str = r##"
      <div class="bg-white rounded-lg shadow hover:shadow-lg transition p-4">
        <div class="bg-{{COLOR}}-100 h-48 rounded mb-4 flex items-center justify-center">
          <span class="text-4xl">🛍️</span>
        </div>
        <h3 class="font-bold mb-2">Product {{INDEX}}</h3>
        <p class="text-{{COLOR}}-600 font-bold">${{PRICE}}.99</p>
      </div>"##;

const ECOMMERCE_SHOP_TAIL: &str = r##"
    </div>
  </div>
</div>
"##;

// ── Portfolio ─────────────────────────────────────────────────────────────────
//
// Rows: INDEX.

fn portfolio() -> Result<SiteTemplate, DomainError> {
    SiteTemplate::builder(Category::Portfolio)
        .page(
            PageTemplate::new("home", "Home", "/")
                .markup(PORTFOLIO_HEAD)
                .repeat(numbered(1..=4), vec![Fragment::markup(PORTFOLIO_PROJECT)])
                .markup(PORTFOLIO_TAIL),
        )
        .build()
}

const PORTFOLIO_HEAD: &str = r##"
<div class="min-h-screen bg-gradient-to-br from-gray-900 to-{{COLOR}}-900 text-white">
  <nav class="p-6">
    <div class="container mx-auto flex justify-between items-center">
      <h1 class="text-2xl font-bold">{{NAME}}</h1>
      <div class="space-x-6">
        <a href="#work" class="hover:text-{{COLOR}}-300">Work</a>
        <a href="#about" class="hover:text-{{COLOR}}-300">About</a>
        <a href="#contact" class="hover:text-{{COLOR}}-300">Contact</a>
      </div>
    </div>
  </nav>

  <section class="container mx-auto px-4 py-20 text-center">
    <div class="mb-8">
      <div class="w-32 h-32 bg-{{COLOR}}-500 rounded-full mx-auto mb-6 flex items-center justify-center text-6xl">
        👤
      </div>
    </div>
    <h2 class="text-6xl font-bold mb-4">{{NAME}}</h2>
    <p class="text-2xl text-{{COLOR}}-300 mb-8">Creative Designer & Developer</p>
    <button class="bg-{{COLOR}}-500 hover:bg-{{COLOR}}-600 px-8 py-3 rounded-full font-semibold transition">
      View My Work
    </button>
  </section>

  <section id="work" class="container mx-auto px-4 py-16">
    <h3 class="text-4xl font-bold text-center mb-12">Featured Projects</h3>
    <div class="grid md:grid-cols-2 gap-8">"##;

const PORTFOLIO_PROJECT: &str = r##"
      <div class="bg-white/10 backdrop-blur rounded-lg overflow-hidden hover:bg-white/20 transition">
        <div class="bg-{{COLOR}}-500/30 h-64 flex items-center justify-center text-6xl">
          🎨
        </div>
        <div class="p-6">
          <h4 class="text-2xl font-bold mb-2">Project {{INDEX}}</h4>
          <p class="text-gray-300">An amazing project showcasing creativity and technical skill</p>
        </div>
      </div>"##;

const PORTFOLIO_TAIL: &str = r##"
    </div>
  </section>
</div>
"##;

// ── Restaurant ────────────────────────────────────────────────────────────────
//
// Section rows: SECTION, SECTION_LOWER. Dish rows: INDEX, PRICE.

const MENU_SECTIONS: [&str; 4] = ["Appetizers", "Main Courses", "Desserts", "Beverages"];

fn restaurant() -> Result<SiteTemplate, DomainError> {
    let sections = MENU_SECTIONS
        .iter()
        .map(|s| Row::new().slot("SECTION", s).slot("SECTION_LOWER", s.to_lowercase()))
        .collect();
    let dishes = (1..=3)
        .map(|i| Row::new().slot("INDEX", i).slot("PRICE", i * 5 + 10))
        .collect();

    SiteTemplate::builder(Category::Restaurant)
        .page(
            PageTemplate::new("home", "Home", "/")
                .markup(RESTAURANT_HEAD)
                .repeat(
                    sections,
                    vec![
                        Fragment::markup(RESTAURANT_SECTION_OPEN),
                        Fragment::repeat(dishes, vec![Fragment::markup(RESTAURANT_DISH)]),
                        Fragment::markup(RESTAURANT_SECTION_CLOSE),
                    ],
                )
                .markup(RESTAURANT_TAIL),
        )
        .build()
}

const RESTAURANT_HEAD: &str = r##"
<div class="min-h-screen bg-white">
  <nav class="bg-{{COLOR}}-800 text-white p-4 sticky top-0 z-50">
    <div class="container mx-auto flex justify-between items-center">
      <h1 class="text-2xl font-bold">{{NAME}}</h1>
      <div class="space-x-6">
        <a href="#menu" class="hover:text-{{COLOR}}-300">Menu</a>
        <a href="#about" class="hover:text-{{COLOR}}-300">About</a>
        <a href="#contact" class="hover:text-{{COLOR}}-300">Reservations</a>
      </div>
    </div>
  </nav>

  <section class="relative h-screen flex items-center justify-center bg-gradient-to-r from-{{COLOR}}-600 to-{{COLOR}}-800 text-white">
    <div class="text-center">
      <div class="text-8xl mb-6">🍽️</div>
      <h2 class="text-6xl font-bold mb-4">{{NAME}}</h2>
      <p class="text-2xl mb-8">Experience culinary excellence</p>
      <button class="bg-white text-{{COLOR}}-800 px-8 py-3 rounded-full font-semibold hover:bg-gray-100 transition">
        Make a Reservation
      </button>
    </div>
  </section>

  <section id="menu" class="py-20 bg-gray-50">
    <div class="container mx-auto px-4">
      <h3 class="text-4xl font-bold text-center mb-12">Our Menu</h3>
      <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">"##;

const RESTAURANT_SECTION_OPEN: &str = r##"
        <div class="bg-white rounded-lg shadow-lg p-8">
          <h4 class="text-2xl font-bold text-{{COLOR}}-800 mb-6">{{SECTION}}</h4>"##;

const RESTAURANT_DISH: &str = r##"
          <div class="mb-4 pb-4 border-b border-gray-200 last:border-0">
            <div class="flex justify-between items-start mb-2">
              <h5 class="font-semibold">Dish {{INDEX}}</h5>
              <span class="text-{{COLOR}}-600 font-bold">${{PRICE}}</span>
            </div>
            <p class="text-gray-600 text-sm">Delicious {{SECTION_LOWER}} item description</p>
          </div>"##;

const RESTAURANT_SECTION_CLOSE: &str = r##"
        </div>"##;

const RESTAURANT_TAIL: &str = r##"
      </div>
    </div>
  </section>
</div>
"##;

// ── SaaS ──────────────────────────────────────────────────────────────────────
//
// Feature rows: ICON, FEATURE, FEATURE_LOWER. Plan rows: PLAN, PRICE.
// Plan feature rows: INDEX.

const SAAS_FEATURES: [(&str, &str); 6] = [
    ("⚡", "Fast"),
    ("🔒", "Secure"),
    ("📊", "Analytics"),
    ("🤝", "Collaboration"),
    ("🚀", "Scalable"),
    ("💡", "Intelligent"),
];

/// (plan, monthly price, highlighted)
const SAAS_PLANS: [(&str, u32, bool); 3] = [
    ("Starter", 29, false),
    ("Professional", 99, true),
    ("Enterprise", 299, false),
];

fn saas() -> Result<SiteTemplate, DomainError> {
    let features = SAAS_FEATURES
        .iter()
        .map(|(icon, feature)| {
            Row::new()
                .slot("ICON", icon)
                .slot("FEATURE", feature)
                .slot("FEATURE_LOWER", feature.to_lowercase())
        })
        .collect();

    let mut home = PageTemplate::new("home", "Home", "/")
        .markup(SAAS_HEAD)
        .repeat(features, vec![Fragment::markup(SAAS_FEATURE_CARD)])
        .markup(SAAS_PRICING_OPEN);

    for (plan, price, highlighted) in SAAS_PLANS {
        let (open, close) = if highlighted {
            (SAAS_PLAN_OPEN_HIGHLIGHTED, SAAS_PLAN_CLOSE_HIGHLIGHTED)
        } else {
            (SAAS_PLAN_OPEN, SAAS_PLAN_CLOSE)
        };
        home = home.repeat(
            vec![Row::new().slot("PLAN", plan).slot("PRICE", price)],
            vec![
                Fragment::markup(open),
                Fragment::markup(SAAS_PLAN_PRICE),
                Fragment::repeat(numbered(1..=4), vec![Fragment::markup(SAAS_PLAN_FEATURE)]),
                Fragment::markup(close),
            ],
        );
    }

    SiteTemplate::builder(Category::Saas)
        .page(home.markup(SAAS_TAIL))
        .build()
}

const SAAS_HEAD: &str = r##"
<div class="min-h-screen bg-white">
  <nav class="border-b border-gray-200 bg-white sticky top-0 z-50">
    <div class="container mx-auto px-4 py-4 flex justify-between items-center">
      <h1 class="text-2xl font-bold text-{{COLOR}}-600">{{NAME}}</h1>
      <div class="space-x-6">
        <a href="#features" class="text-gray-600 hover:text-{{COLOR}}-600">Features</a>
        <a href="#pricing" class="text-gray-600 hover:text-{{COLOR}}-600">Pricing</a>
        <a href="#" class="text-gray-600 hover:text-{{COLOR}}-600">Sign In</a>
        <button class="bg-{{COLOR}}-600 text-white px-6 py-2 rounded-lg hover:bg-{{COLOR}}-700">
          Get Started
        </button>
      </div>
    </div>
  </nav>

  <section class="container mx-auto px-4 py-20 text-center">
    <h2 class="text-6xl font-bold mb-6">
      <span class="bg-gradient-to-r from-{{COLOR}}-600 to-{{COLOR}}-800 text-transparent bg-clip-text">
        Powerful Software
      </span>
      <br />for Modern Teams
    </h2>
    <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
      {{NAME}} helps teams collaborate, automate workflows, and achieve more with intelligent tools.
    </p>
    <div class="flex gap-4 justify-center">
      <button class="bg-{{COLOR}}-600 text-white px-8 py-3 rounded-lg hover:bg-{{COLOR}}-700 font-semibold">
        Start Free Trial
      </button>
      <button class="border-2 border-{{COLOR}}-600 text-{{COLOR}}-600 px-8 py-3 rounded-lg hover:bg-{{COLOR}}-50 font-semibold">
        Watch Demo
      </button>
    </div>
  </section>

  <section id="features" class="bg-gray-50 py-20">
    <div class="container mx-auto px-4">
      <h3 class="text-4xl font-bold text-center mb-12">Features that matter</h3>
      <div class="grid md:grid-cols-3 gap-8">"##;

const SAAS_FEATURE_CARD: &str = r##"
        <div class="bg-white p-8 rounded-lg shadow-lg hover:shadow-xl transition">
          <div class="text-4xl mb-4">{{ICON}}</div>
          <h4 class="text-xl font-bold mb-2">{{FEATURE}}</h4>
          <p class="text-gray-600">Enterprise-grade {{FEATURE_LOWER}} features to power your business.</p>
        </div>"##;

const SAAS_PRICING_OPEN: &str = r##"
      </div>
    </div>
  </section>

  <section id="pricing" class="py-20">
    <div class="container mx-auto px-4">
      <h3 class="text-4xl font-bold text-center mb-12">Simple Pricing</h3>
      <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">"##;

const SAAS_PLAN_OPEN: &str = r##"
        <div class="bg-white border-2 border-gray-200 rounded-lg p-8">"##;

const SAAS_PLAN_OPEN_HIGHLIGHTED: &str = r##"
        <div class="bg-white border-2 border-{{COLOR}}-600 shadow-xl scale-105 rounded-lg p-8">"##;

const SAAS_PLAN_PRICE: &str = r##"
          <h4 class="text-2xl font-bold mb-2">{{PLAN}}</h4>
          <div class="text-4xl font-bold text-{{COLOR}}-600 mb-6">
            ${{PRICE}}
            <span class="text-lg text-gray-600">/month</span>
          </div>
          <ul class="space-y-3 mb-8">"##;

const SAAS_PLAN_FEATURE: &str = r##"
            <li class="flex items-center">
              <span class="text-{{COLOR}}-600 mr-2">✓</span>
              Feature {{INDEX}}
            </li>"##;

const SAAS_PLAN_CLOSE: &str = r##"
          </ul>
          <button class="w-full border-2 border-{{COLOR}}-600 text-{{COLOR}}-600 py-3 rounded-lg font-semibold hover:opacity-90">
            Choose Plan
          </button>
        </div>"##;

const SAAS_PLAN_CLOSE_HIGHLIGHTED: &str = r##"
          </ul>
          <button class="w-full bg-{{COLOR}}-600 text-white py-3 rounded-lg font-semibold hover:opacity-90">
            Choose Plan
          </button>
        </div>"##;

const SAAS_TAIL: &str = r##"
      </div>
    </div>
  </section>
</div>
"##;

// ── Blog ──────────────────────────────────────────────────────────────────────
//
// Rows: INDEX (also the day in "Dec {INDEX}, 2024").

fn blog() -> Result<SiteTemplate, DomainError> {
    SiteTemplate::builder(Category::Blog)
        .page(
            PageTemplate::new("home", "Home", "/")
                .markup(BLOG_HEAD)
                .repeat(numbered(1..=5), vec![Fragment::markup(BLOG_ARTICLE)])
                .markup(BLOG_TAIL),
        )
        .build()
}

const BLOG_HEAD: &str = r##"
<div class="min-h-screen bg-gray-50">
  <nav class="bg-white border-b border-gray-200 sticky top-0 z-50">
    <div class="container mx-auto px-4 py-4 flex justify-between items-center">
      <h1 class="text-2xl font-bold text-{{COLOR}}-600">{{NAME}}</h1>
      <div class="space-x-6">
        <a href="#" class="text-gray-600 hover:text-{{COLOR}}-600">Articles</a>
        <a href="#" class="text-gray-600 hover:text-{{COLOR}}-600">About</a>
        <a href="#" class="text-gray-600 hover:text-{{COLOR}}-600">Subscribe</a>
      </div>
    </div>
  </nav>

  <section class="container mx-auto px-4 py-12">
    <div class="max-w-4xl mx-auto">
      <h2 class="text-5xl font-bold mb-4">Latest Stories</h2>
      <p class="text-xl text-gray-600 mb-12">Insights, tutorials, and stories from {{NAME}}</p>

      <div class="space-y-8">"##;

const BLOG_ARTICLE: &str = r##"
        <article class="bg-white rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition">
          <div class="md:flex">
            <div class="md:w-1/3 bg-{{COLOR}}-100 h-64 md:h-auto flex items-center justify-center text-6xl">
              📝
            </div>
            <div class="md:w-2/3 p-8">
              <div class="text-{{COLOR}}-600 font-semibold mb-2">Category {{INDEX}}</div>
              <h3 class="text-2xl font-bold mb-3 hover:text-{{COLOR}}-600 cursor-pointer">
                Article Title {{INDEX}}: An In-Depth Look at Something Interesting
              </h3>
              <p class="text-gray-600 mb-4">
                This is a compelling excerpt from the blog post that gives readers a preview of what they'll learn by reading the full article...
              </p>
              <div class="flex items-center text-sm text-gray-500">
                <span>John Doe</span>
                <span class="mx-2">•</span>
                <span>Dec {{INDEX}}, 2024</span>
                <span class="mx-2">•</span>
                <span>5 min read</span>
              </div>
            </div>
          </div>
        </article>"##;

const BLOG_TAIL: &str = r##"
      </div>
    </div>
  </section>
</div>
"##;

// ── Business ──────────────────────────────────────────────────────────────────
//
// Rows: ICON, SERVICE, SERVICE_LOWER.

const BUSINESS_SERVICES: [(&str, &str); 3] = [
    ("💼", "Consulting"),
    ("📊", "Strategy"),
    ("⚙️", "Implementation"),
];

fn business() -> Result<SiteTemplate, DomainError> {
    let services = BUSINESS_SERVICES
        .iter()
        .map(|(icon, service)| {
            Row::new()
                .slot("ICON", icon)
                .slot("SERVICE", service)
                .slot("SERVICE_LOWER", service.to_lowercase())
        })
        .collect();

    SiteTemplate::builder(Category::Business)
        .page(
            PageTemplate::new("home", "Home", "/")
                .markup(BUSINESS_HEAD)
                .repeat(services, vec![Fragment::markup(BUSINESS_SERVICE)])
                .markup(BUSINESS_TAIL),
        )
        .build()
}

const BUSINESS_HEAD: &str = r##"
<div class="min-h-screen bg-white">
  <nav class="bg-{{COLOR}}-700 text-white p-4">
    <div class="container mx-auto flex justify-between items-center">
      <h1 class="text-2xl font-bold">{{NAME}}</h1>
      <div class="space-x-6">
        <a href="#services" class="hover:text-{{COLOR}}-200">Services</a>
        <a href="#about" class="hover:text-{{COLOR}}-200">About</a>
        <a href="#contact" class="hover:text-{{COLOR}}-200">Contact</a>
      </div>
    </div>
  </nav>

  <section class="bg-gradient-to-r from-{{COLOR}}-600 to-{{COLOR}}-800 text-white py-24">
    <div class="container mx-auto px-4">
      <div class="max-w-3xl">
        <h2 class="text-5xl font-bold mb-6">Professional Solutions for Your Business</h2>
        <p class="text-xl mb-8">
          {{NAME}} delivers expert consulting and services to help your business thrive in today's competitive market.
        </p>
        <button class="bg-white text-{{COLOR}}-700 px-8 py-3 rounded-lg font-semibold hover:bg-gray-100 transition">
          Get Started
        </button>
      </div>
    </div>
  </section>

  <section id="services" class="py-20">
    <div class="container mx-auto px-4">
      <h3 class="text-4xl font-bold text-center mb-12">Our Services</h3>
      <div class="grid md:grid-cols-3 gap-8">"##;

const BUSINESS_SERVICE: &str = r##"
        <div class="bg-white border border-gray-200 rounded-lg p-8 hover:shadow-xl transition">
          <div class="text-5xl mb-4 text-{{COLOR}}-600">
            {{ICON}}
          </div>
          <h4 class="text-2xl font-bold mb-4">{{SERVICE}}</h4>
          <p class="text-gray-600 mb-4">
            Professional {{SERVICE_LOWER}} services tailored to your business needs.
          </p>
          <a href="#" class="text-{{COLOR}}-600 font-semibold hover:text-{{COLOR}}-800">
            Learn More →
          </a>
        </div>"##;

const BUSINESS_TAIL: &str = r##"
      </div>
    </div>
  </section>

  <section class="bg-gray-50 py-20">
    <div class="container mx-auto px-4 text-center">
      <h3 class="text-4xl font-bold mb-6">Ready to grow your business?</h3>
      <p class="text-xl text-gray-600 mb-8">Let's discuss how we can help you achieve your goals.</p>
      <button class="bg-{{COLOR}}-600 text-white px-8 py-3 rounded-lg font-semibold hover:bg-{{COLOR}}-700 transition">
        Schedule a Consultation
      </button>
    </div>
  </section>
</div>
"##;

// ── General ───────────────────────────────────────────────────────────────────
//
// The only family that echoes the prompt. Rows: INDEX.

fn general() -> Result<SiteTemplate, DomainError> {
    SiteTemplate::builder(Category::General)
        .page(
            PageTemplate::new("home", "Home", "/")
                .markup(GENERAL_HEAD)
                .repeat(numbered(1..=3), vec![Fragment::markup(GENERAL_FEATURE)])
                .markup(GENERAL_TAIL),
        )
        .build()
}

const GENERAL_HEAD: &str = r##"
<div class="min-h-screen bg-gradient-to-br from-{{COLOR}}-50 to-{{COLOR}}-100">
  <nav class="bg-white shadow-md p-4">
    <div class="container mx-auto flex justify-between items-center">
      <h1 class="text-2xl font-bold text-{{COLOR}}-600">{{NAME}}</h1>
      <div class="space-x-6">
        <a href="#" class="text-gray-600 hover:text-{{COLOR}}-600">Home</a>
        <a href="#" class="text-gray-600 hover:text-{{COLOR}}-600">About</a>
        <a href="#" class="text-gray-600 hover:text-{{COLOR}}-600">Contact</a>
      </div>
    </div>
  </nav>

  <section class="container mx-auto px-4 py-20 text-center">
    <h2 class="text-6xl font-bold mb-6 text-{{COLOR}}-900">Welcome to {{NAME}}</h2>
    <p class="text-2xl text-gray-700 mb-8 max-w-2xl mx-auto">
      Your description: {{PROMPT}}
    </p>
    <button class="bg-{{COLOR}}-600 text-white px-8 py-3 rounded-lg hover:bg-{{COLOR}}-700 font-semibold transition">
      Learn More
    </button>
  </section>

  <section class="container mx-auto px-4 py-16">
    <div class="grid md:grid-cols-3 gap-8">"##;

const GENERAL_FEATURE: &str = r##"
      <div class="bg-white rounded-lg shadow-lg p-8 hover:shadow-xl transition">
        <div class="text-5xl mb-4 text-{{COLOR}}-600">✨</div>
        <h3 class="text-2xl font-bold mb-4">Feature {{INDEX}}</h3>
        <p class="text-gray-600">
          Amazing feature description that highlights the benefits and value.
        </p>
      </div>"##;

const GENERAL_TAIL: &str = r##"
    </div>
  </section>
</div>
"##;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use promptsite_core::domain::{ColorToken, RenderContext};

    fn render(category: Category, page: &str, prompt: &str) -> String {
        let template = template_for(category).unwrap();
        let ctx = RenderContext::new("Acme", ColorToken::Teal, prompt);
        template
            .pages
            .iter()
            .find(|p| p.id == page)
            .map(|p| p.render(&ctx))
            .unwrap()
    }

    // ── catalog ───────────────────────────────────────────────────────────

    #[test]
    fn every_category_has_a_valid_template() {
        let templates = all_templates().unwrap();
        assert_eq!(templates.len(), Category::ALL.len());
        for (template, category) in templates.iter().zip(Category::ALL) {
            assert_eq!(template.category, category);
            template.validate().unwrap();
        }
    }

    #[test]
    fn only_ecommerce_has_a_shop_page() {
        for template in all_templates().unwrap() {
            let ids: Vec<_> = template.page_ids().collect();
            if template.category == Category::Ecommerce {
                assert_eq!(ids, ["home", "shop"]);
            } else {
                assert_eq!(ids, ["home"], "{}", template.category);
            }
        }
    }

    #[test]
    fn secondary_colors_follow_category_table() {
        for template in all_templates().unwrap() {
            assert_eq!(
                template.secondary_color,
                template.category.secondary_color()
            );
        }
    }

    #[test]
    fn rendered_pages_leave_no_unfilled_slots() {
        for template in all_templates().unwrap() {
            let ctx = RenderContext::new("Acme", ColorToken::Teal, "a prompt");
            for page in &template.pages {
                let html = page.render(&ctx);
                assert!(!html.contains("{{"), "{} / {}", template.category, page.id);
                assert!(html.contains("Acme"));
                assert!(html.contains("teal-"));
            }
        }
    }

    // ── numbers ───────────────────────────────────────────────────────────

    #[test]
    fn ecommerce_prices() {
        let home = render(Category::Ecommerce, "home", "");
        assert!(home.contains("Product 1</h4>"));
        assert!(home.contains("$49.99"));
        assert!(home.contains("$74.99"));
        assert!(home.contains("$99.99"));
        assert!(!home.contains("Product 4"));

        let shop = render(Category::Ecommerce, "shop", "");
        assert!(shop.contains("Product 1</h3>"));
        assert!(shop.contains("$29.99"));
        assert!(shop.contains("Product 8</h3>"));
        assert!(shop.contains("$99.99"));
        assert!(!shop.contains("Product 9"));
    }

    #[test]
    fn restaurant_menu_has_four_sections_of_three_dishes() {
        let html = render(Category::Restaurant, "home", "");
        for section in MENU_SECTIONS {
            assert!(html.contains(&format!(">{section}</h4>")));
        }
        assert_eq!(html.matches("Dish 1</h5>").count(), 4);
        assert_eq!(html.matches("Dish 3</h5>").count(), 4);
        assert!(html.contains(">$15</span>"));
        assert!(html.contains(">$25</span>"));
        assert!(html.contains("Delicious main courses item description"));
    }

    #[test]
    fn saas_highlights_the_middle_plan() {
        let html = render(Category::Saas, "home", "");
        assert_eq!(html.matches("scale-105").count(), 1);
        assert_eq!(html.matches("Choose Plan").count(), 3);
        assert_eq!(html.matches("Feature 4").count(), 3);

        let starter = html.find(">Starter<").unwrap();
        let pro = html.find(">Professional<").unwrap();
        let highlight = html.find("scale-105").unwrap();
        assert!(starter < highlight && highlight < pro);

        assert!(html.contains("$29"));
        assert!(html.contains("$99"));
        assert!(html.contains("$299"));
        assert!(html.contains("Enterprise-grade analytics features"));
    }

    #[test]
    fn blog_lists_five_dated_articles() {
        let html = render(Category::Blog, "home", "");
        assert_eq!(html.matches("<article").count(), 5);
        assert!(html.contains("Dec 1, 2024"));
        assert!(html.contains("Dec 5, 2024"));
        assert!(!html.contains("Dec 6, 2024"));
    }

    #[test]
    fn portfolio_business_general_counts() {
        let portfolio = render(Category::Portfolio, "home", "");
        assert_eq!(portfolio.matches("Project ").count(), 4);

        let business = render(Category::Business, "home", "");
        assert!(business.contains("Professional strategy services"));
        assert_eq!(business.matches("Learn More →").count(), 3);

        let general = render(Category::General, "home", "");
        assert_eq!(general.matches("Feature ").count(), 3);
    }

    // ── prompt echo ───────────────────────────────────────────────────────

    #[test]
    fn only_general_echoes_the_prompt() {
        let prompt = "something unusual about {{NAME}}";
        let general = render(Category::General, "home", prompt);
        assert!(general.contains("Your description: something unusual about {{NAME}}"));

        for category in Category::ALL.into_iter().filter(|c| *c != Category::General) {
            let html = render(category, "home", prompt);
            assert!(!html.contains("something unusual"), "{category}");
        }
    }
}
