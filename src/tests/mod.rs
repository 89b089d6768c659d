use super::*;

mod autolinks_and_share;

pub(super) const CANTEEN_HTML: &str = r##"
<html lang="en">
  <head>
    <title>Canteen</title>
    <meta name="description" content="Lunch menu">
  </head>
  <body>
    <h1 id="today">Today</h1>
    <p id="add-share-button"><a href="/print">Print</a></p>
    <div id="auto-sort-controls" data-sort-ascending="low first" data-sort-descending="high first"></div>
    <ul id="auto-sort-list">
      <li><a href="#soup">Soup</a></li>
      <li><a href="#pasta">Pasta</a></li>
      <li><a href="#salad">Salad</a></li>
    </ul>
    <section id="soup">
      <h2>Soup</h2>
      <details><summary>Nutrition</summary><table>
        <tr><td>Weight</td><td>1,5 kg</td></tr>
        <tr><td>Fat</td><td>3.2 g</td></tr>
      </table></details>
      <details><summary>Price</summary><table>
        <tr><td>Students</td><td>2,50 €</td></tr>
      </table></details>
    </section>
    <section id="pasta">
      <h2>Pasta</h2>
      <details><summary>Nutrition</summary><table>
        <tr><td>Weight</td><td>2,0</td></tr>
        <tr><td>Fat</td><td>12</td></tr>
      </table></details>
      <details><summary>Price</summary><table>
        <tr><td>Students</td><td>3,10 €</td></tr>
      </table></details>
    </section>
    <section id="salad">
      <h2>Salad</h2>
      <details><summary>Nutrition</summary><table>
        <tr><td>Weight</td><td><b>0,8</b></td></tr>
        <tr><td>Fat</td><td>-</td></tr>
      </table></details>
      <details><summary>Price</summary><table>
        <tr><td>Students</td><td>2,90 €</td></tr>
      </table></details>
    </section>
  </body>
</html>
"##;

pub(super) fn entry_order(page: &Page) -> Result<Vec<String>> {
    page.texts("#auto-sort-list > li > a")
}
