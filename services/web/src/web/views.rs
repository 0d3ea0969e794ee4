//! services/web/src/web/views.rs
//!
//! Pure HTML rendering. Every function here maps data to markup and nothing
//! else; handlers decide what data to pass.
//!
//! Open/close/toggle controls are plain links whose target is the query
//! encoding of the modal state after the corresponding event.

use ailearn_core::blog::BlogPost;
use ailearn_core::catalog::{CatalogCourse, CourseLevel};
use ailearn_core::shell::{AuthMode, ModalState, Route, ShellEvent, ShellSnapshot};

use crate::web::forms::CourseForm;

/// A rejected add-course submission, shown inside the reopened modal.
#[derive(Debug, Clone)]
pub struct FormFeedback {
    pub message: String,
    pub values: CourseForm,
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn link_to(route: Route, modals: ModalState) -> String {
    escape(&format!("{}{}", route.path(), modals.to_query()))
}

//=========================================================================================
// Cards
//=========================================================================================

/// The catalog grid card for one course. The enroll button is inert.
pub fn course_card(course: &CatalogCourse) -> String {
    format!(
        r#"<div class="course-card bg-white rounded-lg shadow-sm overflow-hidden transition-transform hover:scale-[1.02] hover:shadow-md" data-course-id="{id}">
  <img src="{image}" alt="{title}" class="w-full h-48 object-cover">
  <div class="p-6">
    <div class="flex items-center justify-between mb-2">
      <span class="level-badge px-3 py-1 bg-indigo-100 text-indigo-700 rounded-full text-sm">{level}</span>
      <span class="price text-indigo-600 font-semibold">{price}</span>
    </div>
    <h3 class="text-xl font-semibold mb-2">{title}</h3>
    <p class="text-gray-600 mb-4 line-clamp-2">{description}</p>
    <div class="flex items-center justify-between text-sm text-gray-500">
      <span class="duration">{duration}</span>
      <span class="students">{students} students</span>
      <span class="rating">&#9733; {rating}</span>
    </div>
  </div>
  <div class="px-6 pb-6">
    <button type="button" class="w-full bg-indigo-600 text-white py-2 rounded-md hover:bg-indigo-700 transition">Enroll Now</button>
  </div>
</div>"#,
        id = escape(&course.id),
        image = escape(&course.image),
        title = escape(&course.title),
        level = course.level,
        price = escape(&course.price),
        description = escape(&course.description),
        duration = escape(&course.duration),
        students = course.enrolled_students,
        rating = course.rating.display(),
    )
}

pub fn blog_card(post: &BlogPost) -> String {
    format!(
        r#"<article class="blog-post bg-white rounded-lg shadow-sm overflow-hidden">
  <img src="{image}" alt="{title}" class="w-full h-48 object-cover">
  <div class="p-6">
    <h2 class="text-2xl font-bold mb-2 hover:text-indigo-600">{title}</h2>
    <p class="text-gray-600 mb-4">{excerpt}</p>
    <div class="flex items-center justify-between text-sm text-gray-500">
      <span class="author">{author}</span>
      <div class="flex items-center space-x-4">
        <span class="date">{date}</span>
        <span class="read-time">{read_time}</span>
      </div>
    </div>
  </div>
</article>"#,
        image = escape(&post.image),
        title = escape(&post.title),
        excerpt = escape(&post.excerpt),
        author = escape(&post.author),
        date = escape(&post.date),
        read_time = escape(&post.read_time),
    )
}

//=========================================================================================
// Modals
//=========================================================================================

fn text_input(name: &str, label: &str, kind: &str, value: &str) -> String {
    format!(
        r#"<label class="block mb-4"><span class="block text-sm font-medium text-gray-700 mb-1">{label}</span><input type="{kind}" name="{name}" value="{value}" required class="w-full border border-gray-300 rounded-md px-3 py-2"></label>"#,
        value = escape(value),
    )
}

/// The add-course dialog. `feedback` carries the error and the previous input
/// after a rejected submission.
pub fn add_course_modal(route: Route, modals: ModalState, feedback: Option<&FormFeedback>) -> String {
    let empty = CourseForm::default();
    let values = feedback.map(|f| &f.values).unwrap_or(&empty);

    let error = feedback
        .map(|f| {
            format!(
                r#"<p class="form-error text-red-600 mb-4" role="alert">{}</p>"#,
                escape(&f.message)
            )
        })
        .unwrap_or_default();

    let options: String = CourseLevel::ALL
        .iter()
        .map(|level| {
            let selected = if values.level.eq_ignore_ascii_case(level.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{level}"{selected}>{level}</option>"#)
        })
        .collect();

    format!(
        r#"<div id="add-course-modal" class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50" role="dialog" aria-modal="true">
  <div class="bg-white rounded-lg p-8 max-w-lg w-full">
    <div class="flex justify-between items-center mb-6">
      <h2 class="text-2xl font-bold">Add New Course</h2>
      <a href="{close}" class="text-gray-500 hover:text-gray-700" aria-label="Close">&times;</a>
    </div>
    {error}
    <form method="post" action="/courses{query}">
      <input type="hidden" name="return_to" value="{return_to}">
      {title}
      <label class="block mb-4"><span class="block text-sm font-medium text-gray-700 mb-1">Description</span><textarea name="description" required rows="3" class="w-full border border-gray-300 rounded-md px-3 py-2">{description}</textarea></label>
      {image}
      {price}
      <label class="block mb-4"><span class="block text-sm font-medium text-gray-700 mb-1">Level</span><select name="level" required class="w-full border border-gray-300 rounded-md px-3 py-2">{options}</select></label>
      {duration}
      {instructor}
      <button type="submit" class="w-full bg-indigo-600 text-white py-2 rounded-md hover:bg-indigo-700 transition">Add Course</button>
    </form>
  </div>
</div>"#,
        close = link_to(route, modals.apply(ShellEvent::CloseAddCourse)),
        query = escape(&modals.to_query()),
        return_to = route.path(),
        title = text_input("title", "Title", "text", &values.title),
        description = escape(&values.description),
        image = text_input("image", "Image URL", "url", &values.image),
        price = text_input("price", "Price", "text", &values.price),
        duration = text_input("duration", "Duration", "text", &values.duration),
        instructor = text_input("instructor", "Instructor", "text", &values.instructor),
    )
}

/// The sign-in / sign-up dialog. Submitting it changes nothing server-side.
pub fn auth_modal(route: Route, modals: ModalState, mode: AuthMode) -> String {
    let (heading, submit, switch_prompt, switch_label) = match mode {
        AuthMode::SignIn => ("Sign In", "Sign In", "Don't have an account?", "Sign Up"),
        AuthMode::SignUp => ("Create Account", "Sign Up", "Already have an account?", "Sign In"),
    };

    let name_field = match mode {
        AuthMode::SignIn => String::new(),
        AuthMode::SignUp => text_input("full_name", "Full Name", "text", ""),
    };

    format!(
        r#"<div id="auth-modal" class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50" role="dialog" aria-modal="true" data-mode="{mode}">
  <div class="bg-white rounded-lg p-8 max-w-md w-full">
    <div class="flex justify-between items-center mb-6">
      <h2 class="text-2xl font-bold">{heading}</h2>
      <a href="{close}" class="text-gray-500 hover:text-gray-700" aria-label="Close">&times;</a>
    </div>
    <form method="post" action="/auth{query}">
      <input type="hidden" name="mode" value="{mode}">
      <input type="hidden" name="return_to" value="{return_to}">
      {name_field}
      {email}
      {password}
      <button type="submit" class="w-full bg-indigo-600 text-white py-2 rounded-md hover:bg-indigo-700 transition">{submit}</button>
    </form>
    <p class="mt-4 text-center text-sm text-gray-600">{switch_prompt} <a href="{toggle}" class="auth-toggle text-indigo-600 hover:text-indigo-700">{switch_label}</a></p>
  </div>
</div>"#,
        mode = mode.as_str(),
        close = link_to(route, modals.apply(ShellEvent::CloseAuth)),
        query = escape(&modals.to_query()),
        return_to = route.path(),
        email = text_input("email", "Email", "email", ""),
        password = text_input("password", "Password", "password", ""),
        toggle = link_to(route, modals.apply(ShellEvent::ToggleAuthMode)),
    )
}

//=========================================================================================
// Layout
//=========================================================================================

fn header(site_name: &str, route: Route, modals: ModalState) -> String {
    format!(
        r#"<header class="bg-white shadow-sm sticky top-0 z-40">
  <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
    <a href="/" class="text-xl font-bold text-gray-900">{site}</a>
    <div class="hidden md:flex space-x-8">
      <a href="/" class="text-gray-600 hover:text-gray-900">Home</a>
      <a href="/blog" class="text-gray-600 hover:text-gray-900">Blog</a>
      <a href="/#features" class="text-gray-600 hover:text-gray-900">Features</a>
      <a href="/#courses" class="text-gray-600 hover:text-gray-900">Courses</a>
    </div>
    <a href="{sign_in}" class="sign-in bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700 transition">Sign In</a>
  </nav>
</header>"#,
        site = escape(site_name),
        sign_in = link_to(route, modals.apply(ShellEvent::OpenAuth)),
    )
}

fn footer(site_name: &str) -> String {
    format!(
        r##"<footer class="bg-gray-900 text-white py-12">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    <div class="grid md:grid-cols-4 gap-8">
      <div>
        <span class="text-xl font-bold">{site}</span>
        <p class="text-gray-400">Empowering the next generation of AI professionals.</p>
      </div>
      <div>
        <h4 class="text-lg font-semibold mb-4">Quick Links</h4>
        <ul class="space-y-2 text-gray-400">
          <li><a href="/" class="hover:text-white">Home</a></li>
          <li><a href="/blog" class="hover:text-white">Blog</a></li>
          <li><a href="/#courses" class="hover:text-white">Courses</a></li>
        </ul>
      </div>
      <div>
        <h4 class="text-lg font-semibold mb-4">Support</h4>
        <ul class="space-y-2 text-gray-400">
          <li><a href="#" class="hover:text-white">Help Center</a></li>
          <li><a href="#" class="hover:text-white">Contact Us</a></li>
          <li><a href="#" class="hover:text-white">Privacy Policy</a></li>
        </ul>
      </div>
      <div>
        <h4 class="text-lg font-semibold mb-4">Follow Us</h4>
        <div class="flex space-x-4">
          <a href="#" class="text-gray-400 hover:text-white">Twitter</a>
          <a href="#" class="text-gray-400 hover:text-white">GitHub</a>
        </div>
      </div>
    </div>
    <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400">
      <p>&copy; 2025 {site}. All rights reserved.</p>
    </div>
  </div>
</footer>"##,
        site = escape(site_name),
    )
}

/// Wraps page content in the document, header, footer and any open modals.
fn layout(
    site_name: &str,
    title: &str,
    route: Route,
    modals: ModalState,
    feedback: Option<&FormFeedback>,
    content: &str,
) -> String {
    let mut overlays = String::new();
    if modals.add_course {
        overlays.push_str(&add_course_modal(route, modals, feedback));
    }
    if let Some(mode) = modals.auth {
        overlays.push_str(&auth_modal(route, modals, mode));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
<div class="min-h-screen bg-gradient-to-b from-gray-50 to-white">
{header}
<main>
{content}
</main>
{footer}
{overlays}
</div>
</body>
</html>"#,
        title = escape(title),
        header = header(site_name, route, modals),
        footer = footer(site_name),
    )
}

//=========================================================================================
// Pages
//=========================================================================================

const FEATURES: [(&str, &str); 3] = [
    (
        "Expert-Led Courses",
        "Learn from industry professionals with real-world AI experience.",
    ),
    (
        "Community Learning",
        "Join a global community of AI enthusiasts and learners.",
    ),
    (
        "Certification",
        "Earn recognized certificates upon course completion.",
    ),
];

/// The landing composite: hero, features, catalog grid.
pub fn landing_page(
    site_name: &str,
    snapshot: &ShellSnapshot,
    feedback: Option<&FormFeedback>,
) -> String {
    let route = Route::Home;
    let site = escape(site_name);

    let features: String = FEATURES
        .iter()
        .map(|(name, blurb)| {
            format!(
                r#"<div class="feature bg-white p-6 rounded-lg shadow-sm"><h3 class="text-xl font-semibold mb-2">{name}</h3><p class="text-gray-600">{blurb}</p></div>"#
            )
        })
        .collect();

    let cards: String = snapshot.courses.iter().map(course_card).collect();

    let content = format!(
        r##"<section class="hero max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
  <div class="text-center">
    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">Master AI with Expert-Led<span class="text-indigo-600"> Online Learning</span></h1>
    <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">Transform your future with comprehensive AI education. Learn from industry experts and get hands-on experience with cutting-edge technology.</p>
    <div class="flex justify-center space-x-4">
      <a href="#courses" class="bg-indigo-600 text-white px-6 py-3 rounded-md hover:bg-indigo-700 transition">Start Learning</a>
      <a href="#courses" class="border border-gray-300 text-gray-700 px-6 py-3 rounded-md hover:bg-gray-50 transition">View Courses</a>
    </div>
  </div>
</section>
<section id="features" class="bg-gray-50 py-20">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">Why Choose {site}?</h2>
    <div class="grid md:grid-cols-3 gap-8">{features}</div>
  </div>
</section>
<section id="courses" class="py-20">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    <div class="flex justify-between items-center mb-12">
      <h2 class="text-3xl font-bold text-gray-900">Featured Courses</h2>
      <a href="{add_course}" class="add-course flex items-center space-x-2 bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700 transition">+ Add Course</a>
    </div>
    <div class="course-grid grid md:grid-cols-2 lg:grid-cols-3 gap-8">
{cards}
    </div>
  </div>
</section>"##,
        add_course = link_to(route, snapshot.modals.apply(ShellEvent::OpenAddCourse)),
    );

    layout(
        site_name,
        &format!("{site_name} | Master AI with Expert-Led Online Learning"),
        route,
        snapshot.modals,
        feedback,
        &content,
    )
}

/// The static blog listing.
pub fn blog_page(
    site_name: &str,
    posts: &[BlogPost],
    modals: ModalState,
    feedback: Option<&FormFeedback>,
) -> String {
    let cards: String = posts.iter().map(blog_card).collect();

    let content = format!(
        r#"<div class="py-12">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    <div class="text-center mb-12">
      <h1 class="text-4xl font-bold text-gray-900 mb-4">{site} Blog</h1>
      <p class="text-xl text-gray-600">Latest insights, tutorials, and updates from the AI education world</p>
    </div>
    <div class="blog-grid grid md:grid-cols-2 lg:grid-cols-3 gap-8">
{cards}
    </div>
  </div>
</div>"#,
        site = escape(site_name),
    );

    layout(
        site_name,
        &format!("{site_name} Blog"),
        Route::Blog,
        modals,
        feedback,
        &content,
    )
}
