extern crate console_error_panic_hook;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate wasm_bindgen_test;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

pub mod filter;
pub mod fixtures;
pub mod full_photo;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::filter::FilterState;
use crate::full_photo::{join_photos, FullPhoto};

pub const ROOT_SELECTOR: &'static str = "#photo_albums_root";
pub const NO_MATCH_MESSAGE: &'static str = "No photos matching selected criteria";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(contents: &str);
}

#[wasm_bindgen]
pub fn bootstrap() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let full_photos = Rc::new(join_photos(
        &fixtures::photos(),
        &fixtures::albums(),
        &fixtures::users(),
    ));
    let state = Rc::new(RefCell::new(FilterState::default()));

    render_page_photos(full_photos, state);
}

pub fn document_and_root() -> (Document, Element) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let root = document.query_selector(ROOT_SELECTOR).unwrap().unwrap();

    (document, root)
}

/// Rebuilds the whole page from the current filter state. Every handler
/// mutates the shared state and calls back into here, so each transition
/// is one full synchronous re-render.
pub fn render_page_photos(full_photos: Rc<Vec<FullPhoto>>, state: Rc<RefCell<FilterState>>) {
    let (document, root) = document_and_root();
    root.set_inner_html("");

    let section = document.create_element("div").unwrap();
    section.set_class_name("section");
    root.append_child(&section).unwrap();

    let container = document.create_element("div").unwrap();
    container.set_class_name("container");
    section.append_child(&container).unwrap();

    let title = document.create_element("h1").unwrap();
    title.set_class_name("title");
    title.set_text_content(Some("Photos from albums"));
    container.append_child(&title).unwrap();

    render_filter_panel(&document, &container, &full_photos, &state);
    render_photo_table(&document, &container, &full_photos, &state);
}

fn render_filter_panel(
    document: &Document,
    container: &Element,
    full_photos: &Rc<Vec<FullPhoto>>,
    state: &Rc<RefCell<FilterState>>,
) {
    let block = document.create_element("div").unwrap();
    block.set_class_name("block");
    container.append_child(&block).unwrap();

    let panel = document.create_element("nav").unwrap();
    panel.set_class_name("panel");
    block.append_child(&panel).unwrap();

    let heading = document.create_element("p").unwrap();
    heading.set_class_name("panel-heading");
    heading.set_text_content(Some("Filters"));
    panel.append_child(&heading).unwrap();

    // Uploader tabs: "All" plus one link per user.
    let tabs = document.create_element("p").unwrap();
    tabs.set_class_name("panel-tabs has-text-weight-bold");
    panel.append_child(&tabs).unwrap();

    let all_users = document.create_element("a").unwrap();
    all_users.set_attribute("href", "#/").unwrap();
    all_users.set_text_content(Some("All"));
    if state.borrow().selected_user_id == 0 {
        all_users.set_class_name("is-active");
    }
    tabs.append_child(&all_users).unwrap();

    let state0 = state.clone();
    let full_photos0 = full_photos.clone();
    let all_users_click = Closure::<dyn FnMut()>::new(move || {
        state0.borrow_mut().select_user(0);
        render_page_photos(full_photos0.clone(), state0.clone());
    });
    let all_users_el = all_users.dyn_ref::<HtmlElement>().unwrap();
    all_users_el.set_onclick(Some(all_users_click.as_ref().unchecked_ref()));
    all_users_click.forget();

    for user in fixtures::users() {
        let user_link = document.create_element("a").unwrap();
        user_link.set_attribute("href", "#/").unwrap();
        user_link.set_text_content(Some(&user.name));
        if state.borrow().selected_user_id == user.id {
            user_link.set_class_name("is-active");
        }
        tabs.append_child(&user_link).unwrap();

        let state0 = state.clone();
        let full_photos0 = full_photos.clone();
        let user_id = user.id;
        let user_click = Closure::<dyn FnMut()>::new(move || {
            state0.borrow_mut().select_user(user_id);
            render_page_photos(full_photos0.clone(), state0.clone());
        });
        let user_link_el = user_link.dyn_ref::<HtmlElement>().unwrap();
        user_link_el.set_onclick(Some(user_click.as_ref().unchecked_ref()));
        user_click.forget();
    }

    // Title search box, with a clear button only while a query is typed.
    let search_block = document.create_element("div").unwrap();
    search_block.set_class_name("panel-block");
    panel.append_child(&search_block).unwrap();

    let search_control = document.create_element("p").unwrap();
    search_control.set_class_name("control has-icons-left has-icons-right");
    search_block.append_child(&search_control).unwrap();

    let search_input = document.create_element("input").unwrap();
    search_input.set_class_name("input");
    search_control.append_child(&search_input).unwrap();

    let search_input_el = search_input.dyn_ref::<HtmlInputElement>().unwrap();
    search_input_el.set_type("text");
    search_input_el.set_placeholder("Search");
    search_input_el.set_value(&state.borrow().query);

    let state0 = state.clone();
    let full_photos0 = full_photos.clone();
    let search_input0 = search_input.clone();
    let query_input = Closure::<dyn FnMut()>::new(move || {
        let value = search_input0.dyn_ref::<HtmlInputElement>().unwrap().value();
        state0.borrow_mut().set_query(value);
        render_page_photos(full_photos0.clone(), state0.clone());
    });
    search_input_el.set_oninput(Some(query_input.as_ref().unchecked_ref()));
    query_input.forget();

    let search_icon = document.create_element("span").unwrap();
    search_icon.set_class_name("icon is-left");
    search_icon.set_inner_html("<i class=\"fas fa-search\" aria-hidden=\"true\"></i>");
    search_control.append_child(&search_icon).unwrap();

    if !state.borrow().query.is_empty() {
        let clear_icon = document.create_element("span").unwrap();
        clear_icon.set_class_name("icon is-right");
        search_control.append_child(&clear_icon).unwrap();

        let clear_button = document.create_element("button").unwrap();
        clear_button.set_class_name("delete");
        clear_button.set_attribute("type", "button").unwrap();
        clear_button.set_attribute("aria-label", "Close").unwrap();
        clear_icon.append_child(&clear_button).unwrap();

        let state0 = state.clone();
        let full_photos0 = full_photos.clone();
        let clear_click = Closure::<dyn FnMut()>::new(move || {
            state0.borrow_mut().clear_query();
            render_page_photos(full_photos0.clone(), state0.clone());
        });
        let clear_button_el = clear_button.dyn_ref::<HtmlElement>().unwrap();
        clear_button_el.set_onclick(Some(clear_click.as_ref().unchecked_ref()));
        clear_click.forget();
    }

    // Album toggles: "All" plus one button per album, labelled with the
    // first word of the album title.
    let album_block = document.create_element("div").unwrap();
    album_block.set_class_name("panel-block is-flex-wrap-wrap");
    panel.append_child(&album_block).unwrap();

    let all_albums = document.create_element("a").unwrap();
    all_albums.set_attribute("href", "#/").unwrap();
    all_albums.set_text_content(Some("All"));
    if state.borrow().selected_album_ids.is_empty() {
        all_albums.set_class_name("button is-success mr-6");
    } else {
        all_albums.set_class_name("button is-success mr-6 is-outlined");
    }
    album_block.append_child(&all_albums).unwrap();

    let state0 = state.clone();
    let full_photos0 = full_photos.clone();
    let all_albums_click = Closure::<dyn FnMut()>::new(move || {
        state0.borrow_mut().clear_albums();
        render_page_photos(full_photos0.clone(), state0.clone());
    });
    let all_albums_el = all_albums.dyn_ref::<HtmlElement>().unwrap();
    all_albums_el.set_onclick(Some(all_albums_click.as_ref().unchecked_ref()));
    all_albums_click.forget();

    for album in fixtures::albums() {
        let album_button = document.create_element("a").unwrap();
        album_button.set_attribute("href", "#/").unwrap();
        album_button.set_text_content(Some(album.title.split(' ').next().unwrap_or("")));
        if state.borrow().selected_album_ids.contains(&album.id) {
            album_button.set_class_name("button mr-2 my-1 is-info");
        } else {
            album_button.set_class_name("button mr-2 my-1");
        }
        album_block.append_child(&album_button).unwrap();

        let state0 = state.clone();
        let full_photos0 = full_photos.clone();
        let album_id = album.id;
        let album_click = Closure::<dyn FnMut()>::new(move || {
            state0.borrow_mut().toggle_album(album_id);
            render_page_photos(full_photos0.clone(), state0.clone());
        });
        let album_button_el = album_button.dyn_ref::<HtmlElement>().unwrap();
        album_button_el.set_onclick(Some(album_click.as_ref().unchecked_ref()));
        album_click.forget();
    }

    let reset_block = document.create_element("div").unwrap();
    reset_block.set_class_name("panel-block");
    panel.append_child(&reset_block).unwrap();

    let reset_link = document.create_element("a").unwrap();
    reset_link.set_attribute("href", "#/").unwrap();
    reset_link.set_class_name("button is-link is-outlined is-fullwidth");
    reset_link.set_text_content(Some("Reset all filters"));
    reset_block.append_child(&reset_link).unwrap();

    let state0 = state.clone();
    let full_photos0 = full_photos.clone();
    let reset_click = Closure::<dyn FnMut()>::new(move || {
        state0.borrow_mut().reset();
        render_page_photos(full_photos0.clone(), state0.clone());
    });
    let reset_link_el = reset_link.dyn_ref::<HtmlElement>().unwrap();
    reset_link_el.set_onclick(Some(reset_click.as_ref().unchecked_ref()));
    reset_click.forget();
}

fn render_photo_table(
    document: &Document,
    container: &Element,
    full_photos: &Rc<Vec<FullPhoto>>,
    state: &Rc<RefCell<FilterState>>,
) {
    let table_box = document.create_element("div").unwrap();
    table_box.set_class_name("box table-container");
    container.append_child(&table_box).unwrap();

    let visible = state.borrow().visible_photos(full_photos);

    if visible.is_empty() {
        let no_match = document.create_element("p").unwrap();
        no_match.set_text_content(Some(NO_MATCH_MESSAGE));
        table_box.append_child(&no_match).unwrap();
        return;
    }

    let table = document.create_element("table").unwrap();
    table.set_class_name("table is-striped is-narrow is-fullwidth");
    table_box.append_child(&table).unwrap();

    let thead = document.create_element("thead").unwrap();
    table.append_child(&thead).unwrap();

    let header_row = document.create_element("tr").unwrap();
    thead.append_child(&header_row).unwrap();

    // Sort icons are decorative only, no comparator is wired.
    for (label, sort_icon) in [
        ("ID", "fa-sort"),
        ("Photo name", "fa-sort-down"),
        ("Album name", "fa-sort-up"),
        ("User name", "fa-sort"),
    ] {
        let th = document.create_element("th").unwrap();
        header_row.append_child(&th).unwrap();

        let th_span = document.create_element("span").unwrap();
        th_span.set_class_name("is-flex is-flex-wrap-nowrap");
        th_span.set_text_content(Some(label));
        th.append_child(&th_span).unwrap();

        let sort_link = document.create_element("a").unwrap();
        sort_link.set_attribute("href", "#/").unwrap();
        sort_link.set_inner_html(&format!(
            "<span class=\"icon\"><i class=\"fas {}\"></i></span>",
            sort_icon
        ));
        th_span.append_child(&sort_link).unwrap();
    }

    let tbody = document.create_element("tbody").unwrap();
    table.append_child(&tbody).unwrap();

    for photo in &visible {
        let row = document.create_element("tr").unwrap();
        tbody.append_child(&row).unwrap();

        let id_cell = document.create_element("td").unwrap();
        id_cell.set_class_name("has-text-weight-bold");
        id_cell.set_text_content(Some(&photo.id.to_string()));
        row.append_child(&id_cell).unwrap();

        let title_cell = document.create_element("td").unwrap();
        title_cell.set_text_content(Some(&photo.title));
        row.append_child(&title_cell).unwrap();

        let album_cell = document.create_element("td").unwrap();
        if let Some(album) = &photo.album {
            album_cell.set_text_content(Some(&album.title));
        }
        row.append_child(&album_cell).unwrap();

        let user_cell = document.create_element("td").unwrap();
        if let Some(user) = &photo.user {
            user_cell.set_class_name(match user.sex {
                fixtures::Sex::M => "has-text-link",
                fixtures::Sex::F => "has-text-danger",
            });
            user_cell.set_text_content(Some(&user.name));
        }
        row.append_child(&user_cell).unwrap();

        // Decorative row reorder buttons, same as the sort icons.
        let buttons_cell = document.create_element("td").unwrap();
        row.append_child(&buttons_cell).unwrap();

        for arrow in ["\u{2191}", "\u{2193}"] {
            let arrow_button = document.create_element("button").unwrap();
            arrow_button.set_class_name("button");
            arrow_button.set_attribute("type", "button").unwrap();
            arrow_button.set_text_content(Some(arrow));
            buttons_cell.append_child(&arrow_button).unwrap();
        }
    }
}
