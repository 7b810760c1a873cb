use rs_gleaner::{extract, ContentCategory};

fn table_html(rows: usize, cols: usize) -> String {
    let mut html = String::from("<table><tr>");
    for c in 0..cols {
        html.push_str(&format!("<th>H{c}</th>"));
    }
    html.push_str("</tr>");
    for r in 0..rows {
        html.push_str("<tr>");
        for c in 0..cols {
            html.push_str(&format!("<td>v{r}x{c}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

#[test]
fn n_rows_by_c_cols_yields_n_records_with_c_fields() {
    for (rows, cols) in [(2, 3), (5, 1), (10, 4)] {
        let page = extract(&table_html(rows, cols)).unwrap();

        assert_eq!(page.category(), Some(ContentCategory::Table));
        assert_eq!(page.records.len(), rows);
        for record in &page.records {
            assert_eq!(record.len(), cols);
            assert!(!record.is_partial());
        }
        let expected: Vec<String> = (0..cols).map(|c| format!("H{c}")).collect();
        let keys: Vec<&str> = page.records[0].keys().collect();
        assert_eq!(keys, expected);
    }
}

#[test]
fn headerless_table_names_columns_positionally() {
    let html = "<table>\
        <tr><td></td><td></td></tr>\
        <tr><td>a</td><td>b</td></tr>\
        <tr><td>c</td><td>d</td></tr>\
    </table>";

    let page = extract(html).unwrap();
    assert_eq!(page.records.len(), 2);
    let keys: Vec<&str> = page.records[0].keys().collect();
    assert_eq!(keys, vec!["Column_1", "Column_2"]);
    assert_eq!(page.records[0].get("Column_1").unwrap().as_text(), Some("a"));
}

#[test]
fn ragged_rows_are_emitted_as_partial() {
    let html = "<table>\
        <tr><th>A</th><th>B</th><th>C</th></tr>\
        <tr><td>1</td><td>2</td><td>3</td></tr>\
        <tr><td>4</td><td>5</td></tr>\
    </table>";

    let page = extract(html).unwrap();
    assert_eq!(page.records.len(), 2);

    let full = &page.records[0];
    let short = &page.records[1];
    assert!(!full.is_partial());
    assert!(short.is_partial());
    assert_eq!(short.len(), 2);
    assert_eq!(short.get("B").unwrap().as_text(), Some("5"));
    assert!(short.get("C").is_none());
}

#[test]
fn cell_text_is_whitespace_normalized() {
    let html = "<table>\
        <tr><th>  Col   One </th><th>Two</th></tr>\
        <tr><td> padded \n value </td><td>x</td></tr>\
        <tr><td>y</td><td>z</td></tr>\
    </table>";

    let page = extract(html).unwrap();
    let keys: Vec<&str> = page.records[0].keys().collect();
    assert_eq!(keys, vec!["Col One", "Two"]);
    assert_eq!(page.records[0].get("Col One").unwrap().as_text(), Some("padded value"));
}

#[test]
fn every_table_on_the_page_contributes_records() {
    let html = format!("{}{}", table_html(3, 2), table_html(2, 2));
    let page = extract(&html).unwrap();

    assert_eq!(page.records.len(), 5);
}
