//! Bundled page trees.

use tagtree_config::SiteConfig;
use tagtree_html::helpers::map;
use tagtree_html::tags::{
    a, br, button, code, div, em, empty, footer, form, h1, h2, h3, header, hr, input, label, li,
    main, nav, p, section, strong, style, ul,
};
use tagtree_html::{Element, Node, attrs, nodes};

use crate::Page;
use crate::layout::layout;

const LOGIN_STYLE: &str = "
    body {
        font-family: Arial, sans-serif;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        margin: 0;
        padding: 0;
        display: flex;
        justify-content: center;
        align-items: center;
        min-height: 100vh;
    }
    form {
        background: white;
        padding: 2rem;
        border-radius: 10px;
        box-shadow: 0 10px 25px rgba(0,0,0,0.2);
        width: 100%;
        max-width: 400px;
    }
    div {
        margin-bottom: 1rem;
    }
    label {
        display: block;
        margin-bottom: 0.5rem;
        font-weight: bold;
        color: #333;
    }
    input {
        width: 100%;
        padding: 0.75rem;
        border: 2px solid #ddd;
        border-radius: 5px;
        font-size: 1rem;
        box-sizing: border-box;
        transition: border-color 0.3s;
    }
    input:focus {
        outline: none;
        border-color: #667eea;
    }
    button {
        width: 100%;
        padding: 0.75rem;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
        border: none;
        border-radius: 5px;
        font-size: 1rem;
        font-weight: bold;
        cursor: pointer;
        transition: transform 0.2s;
    }
    button:hover {
        transform: translateY(-2px);
    }
";

/// Links to every other bundled page.
#[must_use]
pub fn index_page(site: &SiteConfig) -> Node {
    let links = map(
        Page::ALL.into_iter().filter(|page| *page != Page::Index),
        |page| {
            li().child(
                a().attr("href", format!("/pages/{}", page.name()))
                    .child(page.title()),
            )
        },
    );

    layout(
        site,
        Page::Index.title(),
        empty()
            .child(h1().child(site.title.clone()))
            .child(nav().child(ul().attr("class", "pages").child(links))),
    )
}

/// Username/password form styled by an inline stylesheet.
#[must_use]
pub fn login_page(site: &SiteConfig) -> Node {
    let field = |caption: &'static str, kind: &'static str, name: &'static str, hint: &'static str| {
        div()
            .child(label().child(caption))
            .child(input().attrs(attrs! {
                "type" => kind,
                "name" => name,
                "required" => true,
                "placeholder" => hint,
            }))
    };

    layout(
        site,
        Page::Login.title(),
        empty().child(style().child(LOGIN_STYLE)).child(
            form().attr("method", "post").add(nodes![
                h1().child("Login"),
                field("Username:", "text", "username", "Enter your username"),
                field("Password:", "password", "password", "Enter your password"),
                div().child(button().attr("type", "submit").child("Login")),
            ]),
        ),
    )
}

/// Navigation, inline text semantics and a contact form.
#[must_use]
pub fn showcase_page(site: &SiteConfig) -> Node {
    layout(
        site,
        Page::Showcase.title(),
        empty().add(nodes![
            header()
                .child(h1().child(format!("Welcome to {}", site.title)))
                .child(site_nav()),
            main().add(nodes![
                section().attr("class", "content").add(nodes![
                    h2().child("Introduction"),
                    p().attr("class", "lead")
                        .child("This page is built from nested element factories."),
                    p().add(nodes![
                        "Key features: ",
                        strong().child("Type safety"),
                        " and ",
                        em().child("clean syntax"),
                    ]),
                ]),
                section()
                    .attr("class", "form-example")
                    .child(h3().child("Contact Form"))
                    .child(contact_form()),
            ]),
            footer().add(nodes![
                p().child(format!("\u{a9} {}", site.title)),
                hr(),
                p().attr("class", "small")
                    .child("Built with ")
                    .child(code().child("tagtree")),
            ]),
        ]),
    )
}

fn site_nav() -> Element {
    let link = |href: &'static str, caption: &'static str| {
        li().child(a().attr("href", href).child(caption))
    };

    ul().attrs(attrs! {
        "id" => "some-id",
        "class" => "class-a class-b",
        "boolean-tag" => true,
    })
    .add([
        link("#home", "Home"),
        link("#about", "About"),
        link("#contact", "Contact"),
    ])
}

fn contact_form() -> Element {
    let group = |id: &'static str, caption: &'static str, kind: &'static str| {
        div().attr("class", "form-group").add(nodes![
            label().attr("for", id).child(caption),
            br(),
            input().attrs(attrs! {
                "type" => kind,
                "id" => id,
                "name" => id,
                "required" => true,
            }),
        ])
    };

    form()
        .attrs(attrs! { "method" => "POST", "action" => "/submit" })
        .add([
            group("name", "Name:", "text"),
            group("email", "Email:", "email"),
            div()
                .attr("class", "form-group")
                .child(button().attr("type", "submit").child("Submit")),
        ])
}
